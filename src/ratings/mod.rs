pub mod parse;

use anyhow::Result;
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;
use tokio::fs;

use self::parse::{parse_rankings, parse_songs};

/// Reserved ranking value meaning "this user did not rank this song".
pub const SENTINEL: i32 = -1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingsError {
    #[error("row {row} has {len} rankings, expected {expected}")]
    RowLength {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("line {line}: invalid ranking {token:?}")]
    InvalidRanking { line: usize, token: String },
    #[error("{songs} songs listed for a matrix with {columns} columns")]
    SongCount { songs: usize, columns: usize },
}

/// User x song grid, `rows[user][song]`. Every row has exactly `columns`
/// entries; this is checked once in [`RatingsMatrix::new`] and the matrix is
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RatingsMatrix {
    rows: Vec<Vec<i32>>,
    columns: usize,
}

impl RatingsMatrix {
    /// Builds the matrix, rejecting any row whose length differs from
    /// `expected_columns` (or from the first row when no expectation is given).
    pub fn new(rows: Vec<Vec<i32>>, expected_columns: Option<usize>) -> Result<Self, RatingsError> {
        let columns = expected_columns
            .or_else(|| rows.first().map(|r| r.len()))
            .unwrap_or(0);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(RatingsError::RowLength {
                row,
                len: r.len(),
                expected: columns,
            });
        }
        Ok(Self { rows, columns })
    }

    pub fn users(&self) -> usize {
        self.rows.len()
    }

    pub fn songs(&self) -> usize {
        self.columns
    }

    pub fn row(&self, user: usize) -> &[i32] {
        &self.rows[user]
    }

    /// Lazy view of one song's rankings, one value per user.
    pub fn column(&self, song: usize) -> Column<'_> {
        Column {
            rows: self.rows.iter(),
            song,
        }
    }
}

impl Display for RatingsMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RatingsMatrix {{ users: {}, songs: {} }}",
            self.users(),
            self.songs()
        )
    }
}

pub struct Column<'a> {
    rows: std::slice::Iter<'a, Vec<i32>>,
    song: usize,
}

impl Iterator for Column<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        self.rows.next().map(|row| row[self.song])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Column<'_> {}

/// Reads the song list and the rankings file and builds a validated matrix
/// whose column count equals the number of songs.
pub async fn load(songs_path: &Path, rankings_path: &Path) -> Result<(Vec<String>, RatingsMatrix)> {
    let songs_text = fs::read_to_string(songs_path)
        .await
        .map_err(|e| anyhow::anyhow!("read {} failed: {}", songs_path.display(), e))?;
    let rankings_text = fs::read_to_string(rankings_path)
        .await
        .map_err(|e| anyhow::anyhow!("read {} failed: {}", rankings_path.display(), e))?;

    let songs = parse_songs(&songs_text);
    let rows = parse_rankings(&rankings_text)?;
    debug!("parsed {} songs and {} ranking rows", songs.len(), rows.len());
    let matrix = RatingsMatrix::new(rows, Some(songs.len()))?;

    Ok((songs, matrix))
}
