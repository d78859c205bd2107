//! Profile analyzer library
//!
//! Scores a structured professional profile on keyword coverage, structural
//! completeness, readability and experience, and produces ranked suggestions.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{ProfileAnalyzerError, Result};
pub use processing::analyzer::{ProfileAnalysisResult, ProfileAnalyzer};
pub use processing::profile::{Education, Experience, ProfileInput};
