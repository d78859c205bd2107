//! Profile analysis engine combining keyword, structure, readability and
//! experience scoring into one weighted result with ranked suggestions

use crate::processing::keyword_analyzer::{KeywordAnalysis, KeywordAnalyzer};
use crate::processing::profile::ProfileInput;
use crate::processing::readability_analyzer::{ReadabilityAnalysis, ReadabilityAnalyzer};
use crate::processing::structure_analyzer::{StructureAnalysis, StructureAnalyzer};
use crate::processing::text_processor::clamp_score;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

const MAX_SUGGESTIONS: usize = 8;

const MIN_HEADLINE_CHARS: usize = 50;
const MIN_SUMMARY_CHARS: usize = 200;
const MIN_DESCRIPTION_CHARS: usize = 50;

const HEADLINE_EXAMPLE: &str =
    "Senior Software Engineer | Full-Stack Development | React, Node.js, AWS | Building Scalable Solutions";
const SUMMARY_EXAMPLE: &str = "Results-driven software engineer with 8+ years of experience building scalable web applications. \
Led cross-functional teams to deliver products used by 2M+ users, cutting infrastructure costs by 35%. \
Passionate about mentoring engineers and turning complex problems into simple, reliable systems.";
const EXPERIENCE_EXAMPLE: &str =
    "Led a team of 8 engineers to rebuild the checkout flow, increasing conversion by 25% within 6 months";

/// Main analysis engine that coordinates all analysis components.
///
/// Holds only immutable compiled patterns, so one instance can be shared
/// across threads and reused for any number of profiles.
pub struct ProfileAnalyzer {
    keyword_analyzer: KeywordAnalyzer,
    structure_analyzer: StructureAnalyzer,
    readability_analyzer: ReadabilityAnalyzer,
    metric_regex: Regex,
    weights: ScoringWeights,
}

/// Relative weight of each sub-score in the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub structure: f64,
    pub readability: f64,
    pub experience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: 0.30,
            structure: 0.25,
            readability: 0.25,
            experience: 0.20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    Headline,
    Summary,
    Experience,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSuggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub priority: Priority,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub example: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword: u8,
    pub structure: u8,
    pub readability: u8,
    pub experience: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysisResult {
    pub overall_score: u8,
    pub keyword_analysis: KeywordAnalysis,
    pub structure_analysis: StructureAnalysis,
    pub readability_analysis: ReadabilityAnalysis,
    pub suggestions: Vec<OptimizationSuggestion>,
    pub scores: ScoreBreakdown,
}

impl Default for ProfileAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileAnalyzer {
    pub fn new() -> Self {
        Self::with_weights(ScoringWeights::default())
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        let metric_regex =
            Regex::new(r"\d+%|\d+\s*(years?|months?)").expect("Invalid metric regex");

        Self {
            keyword_analyzer: KeywordAnalyzer::new(),
            structure_analyzer: StructureAnalyzer::new(),
            readability_analyzer: ReadabilityAnalyzer::new(),
            metric_regex,
            weights,
        }
    }

    /// Analyze a profile. Pure: the same input always yields the same result.
    pub fn analyze(&self, profile: &ProfileInput) -> ProfileAnalysisResult {
        let keyword_analysis = self.keyword_analyzer.analyze(profile);
        let structure_analysis = self.structure_analyzer.analyze(profile);
        let readability_analysis = self.readability_analyzer.analyze(profile);

        let scores = ScoreBreakdown {
            keyword: self.calculate_keyword_score(&keyword_analysis),
            structure: structure_analysis.completeness_score,
            readability: readability_analysis.readability_score,
            experience: self.calculate_experience_score(profile),
        };

        let overall_score = self.calculate_overall_score(&scores);

        debug!(
            "Profile scores: keyword={} structure={} readability={} experience={} overall={}",
            scores.keyword, scores.structure, scores.readability, scores.experience, overall_score
        );

        let suggestions = self.generate_suggestions(profile, &keyword_analysis, &readability_analysis);

        ProfileAnalysisResult {
            overall_score,
            keyword_analysis,
            structure_analysis,
            readability_analysis,
            suggestions,
            scores,
        }
    }

    /// 100 minus up to 60 points for missing and up to 30 for underused
    /// keywords, proportional to the reference list size
    pub fn calculate_keyword_score(&self, analysis: &KeywordAnalysis) -> u8 {
        let total = analysis.industry_keywords.len();
        if total == 0 {
            return 100;
        }

        let missing_ratio = analysis.missing_keywords.len() as f64 / total as f64;
        let underused_ratio = analysis.underused_keywords.len() as f64 / total as f64;

        clamp_score(100.0 - missing_ratio * 60.0 - underused_ratio * 30.0)
    }

    pub fn calculate_experience_score(&self, profile: &ProfileInput) -> u8 {
        let experiences = &profile.experiences;
        if experiences.is_empty() {
            return 0;
        }

        let count = experiences.len() as f64;
        let mut score = (count * 10.0).min(40.0);

        let described = experiences
            .iter()
            .filter(|e| e.description_text().chars().count() > MIN_DESCRIPTION_CHARS)
            .count();
        score += described as f64 / count * 35.0;

        if experiences[0].current {
            score += 15.0;
        }

        let complete = experiences.iter().filter(|e| e.is_complete()).count();
        score += complete as f64 / count * 10.0;

        clamp_score(score)
    }

    pub fn calculate_overall_score(&self, scores: &ScoreBreakdown) -> u8 {
        let w = &self.weights;
        let weighted = f64::from(scores.keyword) * w.keyword
            + f64::from(scores.structure) * w.structure
            + f64::from(scores.readability) * w.readability
            + f64::from(scores.experience) * w.experience;

        clamp_score(weighted)
    }

    /// Ordered suggestions: headline, summary, skills, experience, then
    /// readability notes. Truncation keeps the earliest entries.
    pub fn generate_suggestions(
        &self,
        profile: &ProfileInput,
        keyword_analysis: &KeywordAnalysis,
        readability_analysis: &ReadabilityAnalysis,
    ) -> Vec<OptimizationSuggestion> {
        let mut suggestions = Vec::new();

        if profile.headline_text().trim().chars().count() < MIN_HEADLINE_CHARS {
            suggestions.push(OptimizationSuggestion {
                suggestion_type: SuggestionType::Headline,
                priority: Priority::High,
                suggestion: "Make your headline more descriptive and keyword-rich. Include your role, core expertise, and the value you bring.".to_string(),
                example: Some(HEADLINE_EXAMPLE.to_string()),
            });
        }

        if profile.summary_text().trim().chars().count() < MIN_SUMMARY_CHARS {
            suggestions.push(OptimizationSuggestion {
                suggestion_type: SuggestionType::Summary,
                priority: Priority::High,
                suggestion: "Expand your summary to at least 200 characters. Tell your professional story, highlight key achievements, and include relevant keywords.".to_string(),
                example: Some(SUMMARY_EXAMPLE.to_string()),
            });
        }

        if !keyword_analysis.missing_keywords.is_empty() {
            let names: Vec<&str> = keyword_analysis
                .missing_keywords
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            suggestions.push(OptimizationSuggestion {
                suggestion_type: SuggestionType::Skills,
                priority: Priority::Medium,
                suggestion: format!("Add these in-demand skills to your profile: {}", names.join(", ")),
                example: None,
            });
        }

        let lacks_metrics = profile
            .experiences
            .iter()
            .any(|e| !self.metric_regex.is_match(e.description_text()));
        if lacks_metrics {
            suggestions.push(OptimizationSuggestion {
                suggestion_type: SuggestionType::Experience,
                priority: Priority::High,
                suggestion: "Quantify your experience descriptions. Use numbers, percentages, and time frames to show the impact of your work.".to_string(),
                example: Some(EXPERIENCE_EXAMPLE.to_string()),
            });
        }

        suggestions.extend(
            self.readability_analyzer
                .generate_suggestions(readability_analysis)
                .into_iter()
                .map(|suggestion| OptimizationSuggestion {
                    suggestion_type: SuggestionType::Summary,
                    priority: Priority::Medium,
                    suggestion,
                    example: None,
                }),
        );

        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::profile::{Education, Experience};

    fn experience(description: &str, current: bool) -> Experience {
        Experience {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020-01".to_string(),
            end_date: None,
            current,
            description: Some(description.to_string()),
        }
    }

    fn keyword_analysis(missing: usize, underused: usize, total: usize) -> KeywordAnalysis {
        let names = |n: usize, prefix: &str| (0..n).map(|i| format!("{prefix}{i}")).collect();
        KeywordAnalysis {
            missing_keywords: names(missing, "m"),
            underused_keywords: names(underused, "u"),
            industry_keywords: names(total, "k"),
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_keyword_score() {
        let analyzer = ProfileAnalyzer::new();

        assert_eq!(analyzer.calculate_keyword_score(&keyword_analysis(0, 0, 15)), 100);
        // 100 - 10/15*60 - 8/15*30 = 44
        assert_eq!(analyzer.calculate_keyword_score(&keyword_analysis(10, 8, 15)), 44);
        // 100 - 3/15*60 - 3/15*30 = 82
        assert_eq!(analyzer.calculate_keyword_score(&keyword_analysis(3, 3, 15)), 82);
        assert_eq!(analyzer.calculate_keyword_score(&keyword_analysis(0, 0, 0)), 100);
    }

    #[test]
    fn test_experience_score_empty() {
        let analyzer = ProfileAnalyzer::new();
        assert_eq!(analyzer.calculate_experience_score(&ProfileInput::default()), 0);
    }

    #[test]
    fn test_experience_score_components() {
        let analyzer = ProfileAnalyzer::new();
        let long = "Owned the billing platform end to end and shipped the new invoicing flow.";
        let profile = ProfileInput {
            experiences: vec![experience(long, true), experience("Short", false)],
            ..Default::default()
        };

        // 20 for two roles + 17.5 described + 15 current + 10 complete
        assert_eq!(analyzer.calculate_experience_score(&profile), 63);
    }

    #[test]
    fn test_experience_score_caps_role_points() {
        let analyzer = ProfileAnalyzer::new();
        let long = "x".repeat(60);
        let profile = ProfileInput {
            experiences: (0..6).map(|i| experience(&long, i == 0)).collect(),
            ..Default::default()
        };

        assert_eq!(analyzer.calculate_experience_score(&profile), 100);
    }

    #[test]
    fn test_current_role_must_be_first() {
        let analyzer = ProfileAnalyzer::new();
        let profile = ProfileInput {
            experiences: vec![experience("Short", false), experience("Short", true)],
            ..Default::default()
        };

        // 20 for two roles + 10 complete, no current bonus
        assert_eq!(analyzer.calculate_experience_score(&profile), 30);
    }

    #[test]
    fn test_overall_score_weights() {
        let analyzer = ProfileAnalyzer::new();
        let scores = ScoreBreakdown {
            keyword: 80,
            structure: 100,
            readability: 60,
            experience: 50,
        };

        // 24 + 25 + 15 + 10
        assert_eq!(analyzer.calculate_overall_score(&scores), 74);
    }

    #[test]
    fn test_empty_profile_suggestions() {
        let analyzer = ProfileAnalyzer::new();
        let result = analyzer.analyze(&ProfileInput::default());

        let kinds: Vec<SuggestionType> = result.suggestions.iter().map(|s| s.suggestion_type).collect();
        assert_eq!(
            kinds,
            vec![
                SuggestionType::Headline,
                SuggestionType::Summary,
                SuggestionType::Skills,
                SuggestionType::Summary,
                SuggestionType::Summary,
            ]
        );
        assert_eq!(
            result.suggestions[2].suggestion,
            "Add these in-demand skills to your profile: leadership, strategic planning, project management"
        );
        assert_eq!(result.suggestions[3].priority, Priority::Medium);
        assert!(result.suggestions[0].example.is_some());
        assert!(result.suggestions[2].example.is_none());
    }

    #[test]
    fn test_experience_without_description_lacks_metrics() {
        let analyzer = ProfileAnalyzer::new();
        let profile = ProfileInput {
            experiences: vec![
                experience("Grew revenue 30% in 2 years", true),
                Experience {
                    description: None,
                    ..experience("", false)
                },
            ],
            ..Default::default()
        };

        let result = analyzer.analyze(&profile);

        assert!(result
            .suggestions
            .iter()
            .any(|s| s.suggestion_type == SuggestionType::Experience && s.priority == Priority::High));
    }

    #[test]
    fn test_suggestions_are_capped_in_order() {
        let analyzer = ProfileAnalyzer::new();
        let rambling = format!("{} synergy leverage paradigm", vec!["word"; 30].join(" "));
        let profile = ProfileInput {
            headline: Some("Engineer".to_string()),
            summary: Some(rambling.clone()),
            experiences: vec![experience(&rambling, true)],
            education: vec![Education {
                school: "MIT".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };

        let result = analyzer.analyze(&profile);

        assert_eq!(result.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(result.suggestions[0].suggestion_type, SuggestionType::Headline);
        assert_eq!(result.suggestions[1].suggestion_type, SuggestionType::Summary);
        assert_eq!(result.suggestions[2].suggestion_type, SuggestionType::Skills);
        assert_eq!(result.suggestions[3].suggestion_type, SuggestionType::Experience);
        assert!(result.suggestions[4].suggestion.starts_with("Break up long sentences"));
        assert!(result.suggestions[7].suggestion.starts_with("Reduce buzzwords"));
    }

    #[test]
    fn test_length_thresholds_ignore_padding() {
        let analyzer = ProfileAnalyzer::new();
        let profile = ProfileInput {
            headline: Some(format!("Staff Engineer | Distributed Systems{}", " ".repeat(30))),
            summary: Some(format!("  {}{}", "a".repeat(190), " ".repeat(40))),
            ..Default::default()
        };

        let result = analyzer.analyze(&profile);

        assert_eq!(result.suggestions[0].suggestion_type, SuggestionType::Headline);
        assert_eq!(result.suggestions[1].suggestion_type, SuggestionType::Summary);
    }

    #[test]
    fn test_suggestion_serializes_with_type_field() {
        let suggestion = OptimizationSuggestion {
            suggestion_type: SuggestionType::Skills,
            priority: Priority::Medium,
            suggestion: "Add skills".to_string(),
            example: None,
        };

        let json = serde_json::to_value(&suggestion).unwrap();

        assert_eq!(json["type"], "skills");
        assert_eq!(json["priority"], "medium");
        assert!(json.get("example").is_none());
    }
}
