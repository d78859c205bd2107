//! Profile analyzer: deterministic profile scoring and improvement suggestions

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use profile_analyzer::cli::{self, Cli, Commands, ConfigAction};
use profile_analyzer::config::Config;
use profile_analyzer::input::InputManager;
use profile_analyzer::output::formatter::save_report_to_file;
use profile_analyzer::output::ReportGenerator;
use profile_analyzer::processing::analyzer::ProfileAnalyzer;
use profile_analyzer::processing::keyword_analyzer::KeywordAnalyzer;
use profile_analyzer::ProfileAnalyzerError;
use std::path::Path;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.unwrap_or_else(Config::config_path);

    // Execute command
    if let Err(e) = run_command(cli.command, &config_path) {
        error!("Command failed: {:#}", e);
        process::exit(1);
    }
}

fn load_config(path: &Path) -> Result<Config> {
    Config::load_or_default(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

fn run_command(command: Commands, config_path: &Path) -> Result<()> {
    match command {
        Commands::Analyze {
            profile,
            output,
            detailed,
            save,
        } => {
            let config = load_config(config_path)?;
            let format = match output {
                Some(name) => cli::parse_output_format(&name).map_err(ProfileAnalyzerError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let input = InputManager::new()
                .load_profile(&profile)
                .with_context(|| format!("Failed to load profile {}", profile.display()))?;

            info!("Analyzing profile {}", profile.display());
            let analyzer = ProfileAnalyzer::with_weights(config.scoring.weights());
            let result = analyzer.analyze(&input);
            info!("Overall score: {}/100", result.overall_score);

            // Colors never go into saved files
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true);
            let report = generator.generate_report(&result, format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&report, &path)
                        .with_context(|| format!("Failed to save report to {}", path.display()))?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", report),
            }
        }

        Commands::Keywords { industry } => {
            let analyzer = KeywordAnalyzer::new();
            let keywords = analyzer.get_industry_keywords(industry.as_deref());

            match industry.as_deref() {
                Some(name) => println!("Reference vocabulary for '{}':", name),
                None => println!("General reference vocabulary:"),
            }
            for keyword in &keywords {
                println!("  • {}", keyword);
            }
            println!("\nIndustries with a dedicated vocabulary: {}", analyzer.known_industries().join(", "));
        }

        // Reset and Path never read the file, so they work on a broken config
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let config = load_config(config_path)?;
                let content = toml::to_string_pretty(&config).context("Failed to render configuration")?;
                println!("{}", content);
            }
            ConfigAction::Reset => {
                Config::reset(config_path)?;
                println!("Configuration reset to defaults at {}", config_path.display());
            }
            ConfigAction::Path => println!("{}", config_path.display()),
        },
    }

    Ok(())
}
