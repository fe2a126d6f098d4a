mod config;
mod ratings;
mod report;
mod similarity;

use anyhow::Result;
use config::{Config, ConfigError};
use dotenv::dotenv;
use env_logger::Builder;
use log::LevelFilter;
use similarity::pairwise::{song_similarity, user_similarity};
use std::fmt::Display;
use std::time::Instant;

#[macro_use]
extern crate log;

#[tokio::main]
async fn main() -> Result<()> {
    // read .env
    dotenv().ok();

    // init logger
    match std::env::var("RUST_LOG").as_deref() {
        Ok("debug") => {
            Builder::new()
                .filter(None, LevelFilter::Off)
                .filter(Some("ranksim"), LevelFilter::Debug)
                .init();
        }
        Ok("info") => {
            Builder::new()
                .filter(None, LevelFilter::Off)
                .filter(Some("ranksim"), LevelFilter::Info)
                .init();
        }
        _ => env_logger::init(),
    }

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let config = match Config::from_env(&args) {
        Ok(config) => config,
        Err(ConfigError::Usage) => {
            eprintln!("{}", config::USAGE);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    info!("config: {:?}", config);

    match run(&config).await {
        Ok(summary) => {
            info!("{}", summary);
            println!("{}", summary);
            Ok(())
        }
        Err(e) => {
            error!("similarity calculation failed: {}", e);
            Err(e)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RunSummary {
    song_pairs: usize,
    user_pairs: usize,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Similarity calculation completed successfully ({} song pairs, {} user pairs).",
            self.song_pairs, self.user_pairs
        )
    }
}

/// Loads both inputs, scores song pairs then user pairs, and writes the two
/// reports. Nothing is written unless the inputs validate.
async fn run(config: &Config) -> Result<RunSummary> {
    let (songs, matrix) = ratings::load(&config.songs_path, &config.rankings_path).await?;
    info!("ratings loaded: {}", matrix);

    let start = Instant::now();
    let song_records = song_similarity(&songs, &matrix)?;
    let elapsed = start.elapsed().as_secs_f64();
    info!(
        "song similarity over {} songs: {} pairs spends {}s",
        songs.len(),
        song_records.len(),
        elapsed
    );

    let start = Instant::now();
    let user_records = user_similarity(&matrix);
    let elapsed = start.elapsed().as_secs_f64();
    info!(
        "user similarity over {} users: {} pairs spends {}s",
        matrix.users(),
        user_records.len(),
        elapsed
    );

    report::write_report(&config.song_report_path, &song_records, config.format).await?;
    report::write_report(&config.user_report_path, &user_records, config.format).await?;

    Ok(RunSummary {
        song_pairs: song_records.len(),
        user_pairs: user_records.len(),
    })
}
