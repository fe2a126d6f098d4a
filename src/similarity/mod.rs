pub mod pairwise;

use crate::ratings::SENTINEL;

/// Sum of elementwise products over the positions where neither value is the
/// sentinel. Masked positions contribute nothing and the sum is not
/// normalized.
///
/// Both sequences must have the same length; a mismatch is a caller bug and
/// panics.
pub fn masked_dot_product<A, B>(a: A, b: B) -> f64
where
    A: IntoIterator<Item = i32>,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator<Item = i32>,
    B::IntoIter: ExactSizeIterator,
{
    let a = a.into_iter();
    let b = b.into_iter();
    assert_eq!(
        a.len(),
        b.len(),
        "masked dot product over vectors of different length"
    );

    a.zip(b)
        .filter(|&(x, y)| x != SENTINEL && y != SENTINEL)
        .fold(0.0, |acc, (x, y)| acc + (x as i64 * y as i64) as f64)
}
