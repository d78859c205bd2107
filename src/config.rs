//! Configuration management for the profile analyzer

use crate::error::{ProfileAnalyzerError, Result};
use crate::processing::analyzer::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub keyword_weight: f64,
    pub structure_weight: f64,
    pub readability_weight: f64,
    pub experience_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            keyword_weight: weights.keyword,
            structure_weight: weights.structure,
            readability_weight: weights.readability,
            experience_weight: weights.experience,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl ScoringConfig {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            keyword: self.keyword_weight,
            structure: self.structure_weight,
            readability: self.readability_weight,
            experience: self.experience_weight,
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when no config file
    /// exists there yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ProfileAnalyzerError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ProfileAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Overwrite `path` with the defaults without reading what is there
    pub fn reset(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("profile-analyzer")
            .join("config.toml")
    }

    /// Weights must be non-negative and sum to 1
    pub fn validate(&self) -> Result<()> {
        let s = &self.scoring;
        let weights = [
            ("keyword_weight", s.keyword_weight),
            ("structure_weight", s.structure_weight),
            ("readability_weight", s.readability_weight),
            ("experience_weight", s.experience_weight),
        ];

        if let Some((name, value)) = weights.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(ProfileAnalyzerError::Configuration(format!(
                "scoring.{} must be a non-negative number, got {}",
                name, value
            )));
        }

        let total: f64 = weights.iter().map(|(_, w)| w).sum();
        if (total - 1.0).abs() > 1e-6 {
            return Err(ProfileAnalyzerError::Configuration(format!(
                "scoring weights must sum to 1.0, got {:.3}",
                total
            )));
        }

        Ok(())
    }
}
