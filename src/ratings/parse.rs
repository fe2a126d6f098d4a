use super::RatingsError;

/// One label per line. Order defines the column index.
pub fn parse_songs(content: &str) -> Vec<String> {
    content.lines().map(|s| s.to_owned()).collect()
}

/// One row per line of whitespace-separated integers. A blank line is kept as
/// an empty row so that shape validation sees it.
pub fn parse_rankings(content: &str) -> Result<Vec<Vec<i32>>, RatingsError> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| {
            line.split_whitespace()
                .map(|token| {
                    token.parse::<i32>().map_err(|_| RatingsError::InvalidRanking {
                        line: index + 1,
                        token: token.to_owned(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn songs_keep_file_order() {
        assert_eq!(parse_songs("S1\nS2\nS3\n"), vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn songs_normalize_windows_newlines() {
        assert_eq!(parse_songs("Intro\r\nOutro\r\n"), vec!["Intro", "Outro"]);
    }

    #[test]
    fn songs_keep_labels_verbatim() {
        assert_eq!(
            parse_songs("Hey Jude\n\nLet It Be"),
            vec!["Hey Jude", "", "Let It Be"]
        );
    }

    #[test]
    fn empty_song_file_has_no_songs() {
        assert!(parse_songs("").is_empty());
    }

    #[test]
    fn rankings_split_on_any_whitespace() {
        let rows = parse_rankings("5 3 -1\n4\t-1  2\n").unwrap();
        assert_eq!(rows, vec![vec![5, 3, -1], vec![4, -1, 2]]);
    }

    #[test]
    fn rankings_accept_windows_newlines() {
        let rows = parse_rankings("5 3 -1\r\n4 -1 2\r\n").unwrap();
        assert_eq!(rows, vec![vec![5, 3, -1], vec![4, -1, 2]]);
    }

    #[test]
    fn blank_rankings_line_is_an_empty_row() {
        let rows = parse_rankings("1 2\n\n3 4").unwrap();
        assert_eq!(rows, vec![vec![1, 2], vec![], vec![3, 4]]);
    }

    #[test]
    fn invalid_token_names_line_and_token() {
        let err = parse_rankings("1 2\n3 x\n").unwrap_err();
        assert_eq!(
            err,
            RatingsError::InvalidRanking {
                line: 2,
                token: "x".to_owned()
            }
        );
        assert_eq!(err.to_string(), "line 2: invalid ranking \"x\"");
    }
}
