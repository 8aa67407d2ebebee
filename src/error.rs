use thiserror::Error;

/// Custom error types for suggest-domain
#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Invalid config file: {0}")]
    ConfigParse(String),

    #[error("Invalid widget options: {0}\n\nExpected a JSON array of domains or an object with `class`/`domains`.")]
    InvalidOptions(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
