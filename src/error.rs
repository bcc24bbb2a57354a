use thiserror::Error;

/// Custom error types for textswap
#[derive(Debug, Error)]
pub enum TextSwapError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("No matches to replace")]
    NothingToReplace,

    #[error("No replacement text given")]
    MissingReplacement,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
