use super::masked_dot_product;
use crate::ratings::{RatingsError, RatingsMatrix};
use serde::Serialize;
use std::fmt::Display;

/// One compared pair and its score. Songs are keyed by label, users by
/// zero-based row index.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimilarityRecord<K> {
    pub first: K,
    pub second: K,
    pub score: f64,
}

impl<K: Display> Display for SimilarityRecord<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.first,
            self.second,
            format_score(self.score)
        )
    }
}

/// Decimal notation with at least one fractional digit for magnitudes in
/// [1e-3, 1e7), `d.dddE<n>` outside it. Zero is `0.0`.
pub fn format_score(score: f64) -> String {
    let magnitude = score.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        let plain = format!("{}", score);
        if plain.contains('.') {
            plain
        } else {
            plain + ".0"
        }
    } else {
        let scientific = format!("{:e}", score);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let fraction = if mantissa.contains('.') { "" } else { ".0" };
        format!("{}{}E{}", mantissa, fraction, exponent)
    }
}

/// Strict upper triangle of `count` entities: (0,1), (0,2), .., (1,2), ..
pub fn pairs(count: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..count).flat_map(move |i| (i + 1..count).map(move |j| (i, j)))
}

/// Scores every pair from [`pairs`], fetching each entity's vector through
/// `vector_of`.
pub fn scan<'a, F, V>(count: usize, vector_of: F) -> impl Iterator<Item = (usize, usize, f64)> + 'a
where
    F: Fn(usize) -> V + 'a,
    V: IntoIterator<Item = i32> + 'a,
    V::IntoIter: ExactSizeIterator,
{
    pairs(count).map(move |(i, j)| {
        let score = masked_dot_product(vector_of(i), vector_of(j));
        debug!("pair: ({}, {}), score: {}", i, j, score);
        (i, j, score)
    })
}

/// Song-to-song similarity: each song is the column of the matrix at its
/// position in `songs`. The song list must cover exactly the matrix columns.
pub fn song_similarity<'s>(
    songs: &'s [String],
    matrix: &RatingsMatrix,
) -> Result<Vec<SimilarityRecord<&'s str>>, RatingsError> {
    if songs.len() != matrix.songs() {
        return Err(RatingsError::SongCount {
            songs: songs.len(),
            columns: matrix.songs(),
        });
    }
    let records = scan(songs.len(), |song| matrix.column(song))
        .map(|(i, j, score)| SimilarityRecord {
            first: songs[i].as_str(),
            second: songs[j].as_str(),
            score,
        })
        .collect();
    Ok(records)
}

/// User-to-user similarity over the rows of the matrix.
pub fn user_similarity(matrix: &RatingsMatrix) -> Vec<SimilarityRecord<usize>> {
    scan(matrix.users(), |user| matrix.row(user).iter().copied())
        .map(|(first, second, score)| SimilarityRecord {
            first,
            second,
            score,
        })
        .collect()
}
