//! Error types for entix

use thiserror::Error;

/// Main error type for the entix application
#[derive(Debug, Error)]
pub enum EntixError {
    #[error("Unparsable journal entry: {0}")]
    UnparsableEntry(String),

    #[error("Inconsistent scope response: {0}")]
    InconsistentScopeResponse(String),

    #[error("Journal API error (status {status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl EntixError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EntixError::Config(_) => 2,
            EntixError::UnparsableEntry(_) => 3,
            EntixError::InconsistentScopeResponse(_) => 4,
            EntixError::Api { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            EntixError::Config(msg) => {
                if msg.contains("token") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Pass an access token with --token\n\
                        • Set the ENTIX_TOKEN environment variable",
                        msg
                    )
                } else if msg.contains("journal API URL") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Pass the store URL with --api-url\n\
                        • Set ENTIX_JOURNAL_URL (e.g., export ENTIX_JOURNAL_URL=https://journal.example.com)\n\
                        • Point ENTIX_CONFIG at an entix.toml with journal_api_url set",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            EntixError::Api { status, detail } => {
                if *status == 401 || *status == 403 {
                    format!(
                        "Journal API error (status {}): {}\n\n\
                        Suggestions:\n\
                        • Check that your access token is valid and not expired\n\
                        • Check that the token has access to this collection\n\
                        • Use --auth-type web3 for signature-based tokens",
                        status, detail
                    )
                } else {
                    self.to_string()
                }
            }
            EntixError::UnparsableEntry(msg) => {
                format!(
                    "Unparsable journal entry: {}\n\n\
                    The store returned an entry this tool could not convert into an entity.\n\
                    Entries created outside entix may lack the expected title or content shape.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using EntixError
pub type Result<T> = std::result::Result<T, EntixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(EntixError::Config("bad".to_string()).exit_code(), 2);
        assert_eq!(
            EntixError::UnparsableEntry("missing id".to_string()).exit_code(),
            3
        );
        assert_eq!(
            EntixError::InconsistentScopeResponse("holder".to_string()).exit_code(),
            4
        );
        assert_eq!(
            EntixError::Api {
                status: 404,
                detail: "not found".to_string()
            }
            .exit_code(),
            5
        );
    }

    #[test]
    fn test_missing_token_suggestion() {
        let err = EntixError::Config("No access token provided".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("--token"));
        assert!(msg.contains("ENTIX_TOKEN"));
    }

    #[test]
    fn test_missing_url_suggestion() {
        let err = EntixError::Config("No journal API URL configured".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("ENTIX_JOURNAL_URL"));
        assert!(msg.contains("entix.toml"));
    }

    #[test]
    fn test_unauthorized_suggestion() {
        let err = EntixError::Api {
            status: 401,
            detail: "unauthorized".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("token is valid"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = EntixError::InconsistentScopeResponse("holder mismatch".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Inconsistent scope response: holder mismatch");
    }
}
