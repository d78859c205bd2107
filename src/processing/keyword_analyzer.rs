//! Industry keyword coverage analysis
//!
//! Measures how well the free text and skills of a profile cover the
//! reference vocabulary of its stated industry.

use crate::processing::profile::ProfileInput;
use crate::processing::text_processor::percentage;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const MAX_MISSING_KEYWORDS: usize = 10;
const MAX_UNDERUSED_KEYWORDS: usize = 8;
const MAX_INDUSTRY_KEYWORDS: usize = 15;

/// Keywords below this density (percent of corpus tokens) count as underused
const UNDERUSED_DENSITY_THRESHOLD: f64 = 0.5;

const MIN_HEADLINE_WORDS: usize = 5;

const INDUSTRY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Information Technology",
        &[
            "javascript",
            "python",
            "java",
            "react",
            "node.js",
            "aws",
            "cloud computing",
            "devops",
            "agile",
            "scrum",
            "machine learning",
            "data analysis",
            "sql",
            "api",
            "microservices",
            "docker",
            "kubernetes",
            "ci/cd",
            "software development",
            "system design",
        ],
    ),
    (
        "Marketing",
        &[
            "digital marketing",
            "seo",
            "sem",
            "content marketing",
            "social media",
            "brand management",
            "google analytics",
            "email marketing",
            "marketing automation",
            "lead generation",
            "conversion optimization",
            "market research",
            "campaign management",
            "copywriting",
            "ppc",
        ],
    ),
    (
        "Finance",
        &[
            "financial analysis",
            "financial modeling",
            "budgeting",
            "forecasting",
            "accounting",
            "risk management",
            "investment",
            "portfolio management",
            "compliance",
            "auditing",
            "excel",
            "valuation",
            "gaap",
            "financial reporting",
            "due diligence",
        ],
    ),
    (
        "Sales",
        &[
            "business development",
            "account management",
            "crm",
            "salesforce",
            "lead generation",
            "negotiation",
            "pipeline management",
            "client relationships",
            "revenue growth",
            "quota",
            "b2b",
            "saas",
            "cold calling",
            "sales strategy",
            "territory management",
        ],
    ),
    (
        "Healthcare",
        &[
            "patient care",
            "clinical",
            "healthcare management",
            "hipaa",
            "electronic health records",
            "medical",
            "nursing",
            "patient safety",
            "healthcare compliance",
            "quality improvement",
            "epic",
            "care coordination",
            "public health",
        ],
    ),
    (
        "Education",
        &[
            "curriculum development",
            "instructional design",
            "classroom management",
            "lesson planning",
            "student engagement",
            "assessment",
            "e-learning",
            "educational technology",
            "teaching",
            "tutoring",
            "special education",
            "differentiated instruction",
        ],
    ),
];

const GENERAL_KEYWORDS: &[&str] = &[
    "leadership",
    "strategic planning",
    "project management",
    "team building",
    "communication",
    "problem solving",
    "collaboration",
    "innovation",
    "results-driven",
    "cross-functional",
    "stakeholder management",
    "process improvement",
    "analytical skills",
    "decision making",
    "mentoring",
    "budget management",
    "time management",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub missing_keywords: Vec<String>,
    pub underused_keywords: Vec<String>,
    pub industry_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Density of one reference keyword in the corpus, in percent of tokens
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordDensity {
    pub keyword: String,
    pub density: f64,
}

/// Multi-word keywords match with any run of whitespace between words
fn phrase_regex(phrase: &str) -> Regex {
    let pattern = phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    Regex::new(&pattern).expect("Invalid phrase regex")
}

#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    phrase_patterns: HashMap<&'static str, Regex>,
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordAnalyzer {
    pub fn new() -> Self {
        let phrase_patterns = INDUSTRY_KEYWORDS
            .iter()
            .flat_map(|(_, terms)| terms.iter())
            .chain(GENERAL_KEYWORDS.iter())
            .filter(|term| term.split_whitespace().count() > 1)
            .map(|term| (*term, phrase_regex(term)))
            .collect();

        Self { phrase_patterns }
    }

    /// Reference vocabulary for an industry.
    ///
    /// The industry name is matched case-insensitively against the table,
    /// in either substring direction. Matched terms come first, followed by
    /// the general professional terms, which are always included.
    pub fn get_industry_keywords(&self, industry: Option<&str>) -> Vec<String> {
        let mut keywords = Vec::new();

        let needle = industry.map(|i| i.trim().to_lowercase()).unwrap_or_default();
        if !needle.is_empty() {
            let matched = INDUSTRY_KEYWORDS.iter().find(|(name, _)| {
                let name = name.to_lowercase();
                needle.contains(&name) || name.contains(&needle)
            });

            if let Some((name, terms)) = matched {
                debug!("Industry '{}' matched vocabulary '{}'", needle, name);
                keywords.extend(terms.iter().map(|t| t.to_string()));
            }
        }

        keywords.extend(GENERAL_KEYWORDS.iter().map(|t| t.to_string()));
        keywords
    }

    /// Names of the industries that have a dedicated vocabulary
    pub fn known_industries(&self) -> Vec<&'static str> {
        INDUSTRY_KEYWORDS.iter().map(|(name, _)| *name).collect()
    }

    /// Lower-cased corpus of headline, summary, experience titles and
    /// descriptions, and skills
    pub fn extract_text_content(&self, profile: &ProfileInput) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(headline) = &profile.headline {
            parts.push(headline.clone());
        }
        if let Some(summary) = &profile.summary {
            parts.push(summary.clone());
        }
        for exp in &profile.experiences {
            parts.push(format!("{} {}", exp.title, exp.description_text()));
        }
        parts.extend(profile.skills.iter().cloned());

        parts.join(" ").to_lowercase()
    }

    /// Density of each keyword in `text`, in the order given.
    ///
    /// Single-word keywords count tokens (longer than two characters) that
    /// contain the keyword. Multi-word keywords count phrase occurrences in
    /// the raw text, allowing any run of whitespace between words.
    pub fn calculate_keyword_density(&self, text: &str, keywords: &[String]) -> Vec<KeywordDensity> {
        let tokens: Vec<&str> = text
            .split_whitespace()
            .filter(|w| w.chars().count() > 2)
            .collect();
        let total_words = tokens.len();

        keywords
            .iter()
            .map(|keyword| {
                let count = if keyword.split_whitespace().count() > 1 {
                    self.count_phrase(text, keyword)
                } else {
                    tokens.iter().filter(|t| t.contains(keyword.as_str())).count()
                };

                KeywordDensity {
                    keyword: keyword.clone(),
                    density: percentage(count, total_words),
                }
            })
            .collect()
    }

    pub fn analyze(&self, profile: &ProfileInput) -> KeywordAnalysis {
        let industry_keywords = self.get_industry_keywords(profile.industry.as_deref());
        let text = self.extract_text_content(profile);
        let densities = self.calculate_keyword_density(&text, &industry_keywords);

        let mut missing_keywords = Vec::new();
        let mut underused_keywords = Vec::new();

        for entry in densities {
            if entry.density == 0.0 {
                missing_keywords.push(entry.keyword);
            } else if entry.density < UNDERUSED_DENSITY_THRESHOLD {
                underused_keywords.push(entry.keyword);
            }
        }

        let suggestions = Self::generate_suggestions(
            &missing_keywords,
            &underused_keywords,
            profile.headline_text(),
        );

        missing_keywords.truncate(MAX_MISSING_KEYWORDS);
        underused_keywords.truncate(MAX_UNDERUSED_KEYWORDS);

        let mut industry_keywords = industry_keywords;
        industry_keywords.truncate(MAX_INDUSTRY_KEYWORDS);

        debug!(
            "Keyword analysis: {} missing, {} underused of {} reference terms",
            missing_keywords.len(),
            underused_keywords.len(),
            industry_keywords.len()
        );

        KeywordAnalysis {
            missing_keywords,
            underused_keywords,
            industry_keywords,
            suggestions,
        }
    }

    fn generate_suggestions(missing: &[String], underused: &[String], headline: &str) -> Vec<String> {
        let mut suggestions = Vec::new();

        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().take(5).map(String::as_str).collect();
            suggestions.push(format!(
                "Consider adding these relevant keywords: {}",
                names.join(", ")
            ));
        }

        if !underused.is_empty() {
            let names: Vec<&str> = underused.iter().take(3).map(String::as_str).collect();
            suggestions.push(format!(
                "Increase usage of these important keywords: {}",
                names.join(", ")
            ));
        }

        if headline.split_whitespace().count() < MIN_HEADLINE_WORDS {
            suggestions.push(
                "Expand your headline to include more relevant keywords (aim for 5+ words)"
                    .to_string(),
            );
        }

        suggestions
    }

    fn count_phrase(&self, text: &str, phrase: &str) -> usize {
        match self.phrase_patterns.get(phrase) {
            Some(re) => re.find_iter(text).count(),
            None => phrase_regex(phrase).find_iter(text).count(),
        }
    }
}
