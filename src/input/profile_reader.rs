//! Profile parsing from the supported file formats

use crate::error::{ProfileAnalyzerError, Result};
use crate::processing::profile::ProfileInput;

pub trait ProfileReader {
    fn read(&self, content: &str) -> Result<ProfileInput>;
}

/// camelCase JSON as emitted by the web application
pub struct JsonProfileReader;

impl ProfileReader for JsonProfileReader {
    fn read(&self, content: &str) -> Result<ProfileInput> {
        ProfileInput::from_json_str(content)
    }
}

pub struct TomlProfileReader;

impl ProfileReader for TomlProfileReader {
    fn read(&self, content: &str) -> Result<ProfileInput> {
        toml::from_str(content).map_err(|e| {
            ProfileAnalyzerError::InvalidInput(format!("Failed to parse TOML profile: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_profile() {
        let content = r#"
headline = "Staff Accountant"
industry = "Finance"
skills = ["gaap", "excel", "auditing"]

[[experiences]]
title = "Accountant"
company = "Ledger & Co"
startDate = "2019-06"
current = true
"#;

        let profile = TomlProfileReader.read(content).unwrap();

        assert_eq!(profile.industry.as_deref(), Some("Finance"));
        assert_eq!(profile.experiences[0].start_date, "2019-06");
        assert!(profile.experiences[0].description.is_none());
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let err = JsonProfileReader.read("{\"skills\": 42}").unwrap_err();
        assert!(matches!(err, ProfileAnalyzerError::Serialization(_)));
    }
}
