//! CLI interface for the profile analyzer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "profile-analyzer")]
#[command(about = "Score a professional profile and suggest improvements")]
#[command(long_about = "Analyze a structured professional profile for keyword coverage, section completeness, readability and experience depth")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a profile file
    Analyze {
        /// Path to the profile (JSON or TOML)
        #[arg(short, long)]
        profile: PathBuf,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Include keyword, readability and section details
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show the reference keyword vocabulary for an industry
    Keywords {
        /// Industry name, matched case-insensitively
        #[arg(short, long)]
        industry: Option<String>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::try_parse_from([
            "profile-analyzer",
            "--verbose",
            "analyze",
            "--profile",
            "me.json",
            "--output",
            "json",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Analyze { profile, output, detailed, save } => {
                assert_eq!(profile, PathBuf::from("me.json"));
                assert_eq!(output.as_deref(), Some("json"));
                assert!(!detailed);
                assert!(save.is_none());
            }
            _ => panic!("expected analyze command"),
        }
    }
}
