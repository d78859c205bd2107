//! Profile input structures
//!
//! `ProfileInput` mirrors the camelCase record produced by the upstream
//! extraction step. Absent or `null` optional fields are coerced to empty
//! values during deserialization so the analyzers never deal with them.

use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    #[serde(deserialize_with = "null_as_default")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub industry: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experiences: Vec<Experience>,
    #[serde(deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub current: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_default")]
    pub school: String,
    #[serde(deserialize_with = "null_as_default")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub field: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub start_year: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub end_year: Option<i32>,
}

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProfileInput {
    /// Parse a profile from a JSON body
    pub fn from_json_str(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn headline_text(&self) -> &str {
        self.headline.as_deref().unwrap_or("")
    }

    pub fn summary_text(&self) -> &str {
        self.summary.as_deref().unwrap_or("")
    }
}

impl Experience {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Title, company and start date are all populated
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.company.trim().is_empty()
            && !self.start_date.trim().is_empty()
    }
}
