//! Error handling for the profile analyzer
//!
//! The analysis engine itself is total; these errors only surface at the
//! boundaries (loading profiles, configuration, rendering reports).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ProfileAnalyzerError>;
