//! Input manager for loading profiles from disk

use crate::error::{ProfileAnalyzerError, Result};
use crate::input::file_detector::FileType;
use crate::input::profile_reader::{JsonProfileReader, ProfileReader, TomlProfileReader};
use crate::processing::profile::ProfileInput;
use log::info;
use std::path::Path;

#[derive(Debug, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub fn load_profile(&self, path: &Path) -> Result<ProfileInput> {
        if !path.exists() {
            return Err(ProfileAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;
        let content = std::fs::read_to_string(path)?;

        let profile = match file_type {
            FileType::Json => {
                info!("Reading JSON profile: {}", path.display());
                JsonProfileReader.read(&content)?
            }
            FileType::Toml => {
                info!("Reading TOML profile: {}", path.display());
                TomlProfileReader.read(&content)?
            }
            FileType::Unknown => {
                return Err(ProfileAnalyzerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        Ok(profile)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ProfileAnalyzerError::InvalidInput(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        Ok(FileType::from_extension(extension))
    }
}
