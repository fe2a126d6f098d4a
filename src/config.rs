use crate::report::ReportFormat;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "Usage: ranksim <songs_file> <rankings_file> <song_similarity_output_file> <user_similarity_output_file>";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{}", USAGE)]
    Usage,
    #[error("REPORT_FORMAT: {0}")]
    Format(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub songs_path: PathBuf,
    pub rankings_path: PathBuf,
    pub song_report_path: PathBuf,
    pub user_report_path: PathBuf,
    pub format: ReportFormat,
}

impl Config {
    /// Paths come from the four positional arguments, or from
    /// `SONGS_FILE`, `RANKINGS_FILE`, `SONG_SIMILARITY_FILE` and
    /// `USER_SIMILARITY_FILE` when no argument is given.
    pub fn resolve(args: &[String], env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let paths = match args {
            [songs, rankings, song_report, user_report] => [
                songs.clone(),
                rankings.clone(),
                song_report.clone(),
                user_report.clone(),
            ],
            [] => [
                env("SONGS_FILE").ok_or(ConfigError::Usage)?,
                env("RANKINGS_FILE").ok_or(ConfigError::Usage)?,
                env("SONG_SIMILARITY_FILE").ok_or(ConfigError::Usage)?,
                env("USER_SIMILARITY_FILE").ok_or(ConfigError::Usage)?,
            ],
            _ => return Err(ConfigError::Usage),
        };
        let format = match env("REPORT_FORMAT") {
            Some(value) => value
                .parse::<ReportFormat>()
                .map_err(|e| ConfigError::Format(e.to_string()))?,
            None => ReportFormat::default(),
        };
        let [songs_path, rankings_path, song_report_path, user_report_path] = paths.map(PathBuf::from);

        Ok(Config {
            songs_path,
            rankings_path,
            song_report_path,
            user_report_path,
            format,
        })
    }

    pub fn from_env(args: &[String]) -> Result<Self, ConfigError> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }
}
