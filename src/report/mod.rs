use crate::similarity::pairwise::SimilarityRecord;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    JsonLines,
}

impl Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::JsonLines => write!(f, "json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" | "jsonl" => Ok(ReportFormat::JsonLines),
            other => Err(anyhow::anyhow!("unknown report format: {}", other)),
        }
    }
}

/// One line per record, newline terminated. No records renders as "".
pub fn render<K>(records: &[SimilarityRecord<K>], format: ReportFormat) -> Result<String>
where
    K: Display + Serialize,
{
    let mut out = String::new();
    for record in records {
        match format {
            ReportFormat::Csv => out += &record.to_string(),
            ReportFormat::JsonLines => out += &serde_json::to_string(record)?,
        }
        out.push('\n');
    }
    Ok(out)
}

/// Renders the whole report first, then creates (or truncates) `path`.
pub async fn write_report<K>(
    path: &Path,
    records: &[SimilarityRecord<K>],
    format: ReportFormat,
) -> Result<()>
where
    K: Display + Serialize,
{
    let content = render(records, format)?;
    let mut file = fs::File::create(path)
        .await
        .map_err(|e| anyhow::anyhow!("create {} failed: {}", path.display(), e))?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await?;
    info!(
        "write {} {} records to {}",
        records.len(),
        format,
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<SimilarityRecord<&'static str>> {
        vec![
            SimilarityRecord {
                first: "S1",
                second: "S2",
                score: 15.0,
            },
            SimilarityRecord {
                first: "S1",
                second: "S3",
                score: 8.0,
            },
        ]
    }

    #[test]
    fn csv_is_one_line_per_pair() {
        let out = render(&records(), ReportFormat::Csv).unwrap();
        assert_eq!(out, "S1,S2,15.0\nS1,S3,8.0\n");
    }

    #[test]
    fn json_lines_serialize_each_record() {
        let users = vec![SimilarityRecord {
            first: 0usize,
            second: 1usize,
            score: 20.0,
        }];
        let out = render(&users, ReportFormat::JsonLines).unwrap();
        assert_eq!(out, "{\"first\":0,\"second\":1,\"score\":20.0}\n");
    }

    #[test]
    fn empty_report_is_empty() {
        let none: Vec<SimilarityRecord<usize>> = vec![];
        assert_eq!(render(&none, ReportFormat::Csv).unwrap(), "");
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("csv".parse::<ReportFormat>().unwrap(), ReportFormat::Csv);
        assert_eq!(
            " JSON ".parse::<ReportFormat>().unwrap(),
            ReportFormat::JsonLines
        );
        assert!("xml".parse::<ReportFormat>().is_err());
    }

    #[tokio::test]
    async fn write_report_truncates_existing_file() {
        let path = std::env::temp_dir().join(format!("ranksim-{}-report.txt", std::process::id()));
        fs::write(&path, "stale content that is longer than the report\n")
            .await
            .unwrap();

        write_report(&path, &records(), ReportFormat::Csv)
            .await
            .unwrap();
        let written = fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "S1,S2,15.0\nS1,S3,8.0\n");

        let _ = fs::remove_file(&path).await;
    }
}
