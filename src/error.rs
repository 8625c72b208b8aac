use std::io;
use std::time::Duration;

/// Classified failure kinds for the lookup pipeline.
///
/// Each kind carries its own process exit code so a caller can tell
/// "account has no data" apart from "the page layout changed" without
/// grepping the message text.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("config: {0}")]
    Config(String),
    #[error("GET {url} timed out after {deadline:?}")]
    FetchTimeout { url: String, deadline: Duration },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("account {account_no}: expected two tables, page has {tables_found}")]
    AccountNotFound {
        account_no: String,
        tables_found: usize,
    },
    #[error("malformed table: {reason}")]
    MalformedTable { reason: String },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl ScrapeError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ScrapeError::MalformedTable {
            reason: reason.into(),
        }
    }

    /// Exit code for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScrapeError::Config(_) => 2,
            ScrapeError::FetchTimeout { .. } => 3,
            ScrapeError::AccountNotFound { .. } => 4,
            ScrapeError::MalformedTable { .. } => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let errors = [
            ScrapeError::Config("missing key".into()),
            ScrapeError::FetchTimeout {
                url: "http://example.test/1".into(),
                deadline: Duration::from_secs(10),
            },
            ScrapeError::AccountNotFound {
                account_no: "1234567890".into(),
                tables_found: 0,
            },
            ScrapeError::malformed("charges table has no rows"),
        ];
        let codes: Vec<i32> = errors.iter().map(ScrapeError::exit_code).collect();
        assert_eq!(codes, vec![2, 3, 4, 5]);
    }

    #[test]
    fn account_not_found_names_the_account() {
        let err = ScrapeError::AccountNotFound {
            account_no: "8675309".into(),
            tables_found: 1,
        };
        assert!(err.to_string().contains("8675309"));
    }
}
