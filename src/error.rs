use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuzzError {
    #[error("URL must contain 'FUZZ' placeholder.")]
    MissingPlaceholder,

    #[error("Wordlist file '{}' not found.", .0.display())]
    WordlistNotFound(PathBuf),

    #[error("Failed to read wordlist: {0}")]
    WordlistRead(#[source] io::Error),

    #[error("Search string cannot be empty.")]
    EmptySearch,

    #[error("Invalid delay '{0}': must be a finite, non-negative number of seconds that fits a duration.")]
    InvalidDelay(f64),

    #[error("Failed to open output file: {0}")]
    OutputOpen(#[source] io::Error),

    #[error("Failed to write to output file: {0}")]
    OutputWrite(#[source] io::Error),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Unauthorized access! Check your session cookie.")]
    Unauthorized,

    #[error("Forbidden! The request might be blocked.")]
    Forbidden,

    #[error("Connection error! The server might be down.")]
    Connection(String),

    #[error("Unexpected error: {0}")]
    Request(String),

    #[error("Failed to write to standard output: {0}")]
    Console(#[from] io::Error),
}

impl FuzzError {
    pub fn exit_code(&self) -> u8 {
        1
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FuzzError::MissingPlaceholder
                | FuzzError::WordlistNotFound(_)
                | FuzzError::WordlistRead(_)
                | FuzzError::EmptySearch
                | FuzzError::InvalidDelay(_)
                | FuzzError::OutputOpen(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_console_output() {
        assert_eq!(
            FuzzError::MissingPlaceholder.to_string(),
            "URL must contain 'FUZZ' placeholder."
        );
        assert_eq!(
            FuzzError::WordlistNotFound(PathBuf::from("ids.txt")).to_string(),
            "Wordlist file 'ids.txt' not found."
        );
        assert_eq!(
            FuzzError::Request("boom".to_string()).to_string(),
            "Unexpected error: boom"
        );
    }

    #[test]
    fn test_invalid_delay_message_covers_overflow() {
        assert_eq!(
            FuzzError::InvalidDelay(1e30).to_string(),
            "Invalid delay '1000000000000000000000000000000': must be a finite, non-negative number of seconds that fits a duration."
        );
    }

    #[test]
    fn test_all_errors_exit_with_one() {
        assert_eq!(FuzzError::Unauthorized.exit_code(), 1);
        assert_eq!(FuzzError::EmptySearch.exit_code(), 1);
    }

    #[test]
    fn test_config_errors() {
        assert!(FuzzError::EmptySearch.is_config_error());
        assert!(FuzzError::InvalidDelay(-1.0).is_config_error());
        assert!(!FuzzError::Forbidden.is_config_error());
        assert!(!FuzzError::Connection("refused".to_string()).is_config_error());
    }
}
