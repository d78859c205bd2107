//! Section presence and completeness checks

use crate::processing::profile::ProfileInput;
use serde::{Deserialize, Serialize};

const HEADLINE_WEIGHT: u8 = 20;
const SUMMARY_WEIGHT: u8 = 25;
const EXPERIENCE_WEIGHT: u8 = 30;
const SKILLS_WEIGHT: u8 = 15;
const EDUCATION_WEIGHT: u8 = 10;

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_SKILLS: usize = 3;

/// Below this score the profile is told to fill missing sections first
const LOW_COMPLETENESS_THRESHOLD: u8 = 70;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureAnalysis {
    pub has_headline: bool,
    pub has_summary: bool,
    pub has_experience: bool,
    pub has_skills: bool,
    pub has_education: bool,
    pub completeness_score: u8,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StructureAnalyzer;

impl StructureAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, profile: &ProfileInput) -> StructureAnalysis {
        let has_headline = !profile.headline_text().trim().is_empty();
        let has_summary = profile.summary_text().trim().chars().count() > MIN_SUMMARY_CHARS;
        let has_experience = profile.experiences.iter().any(|e| e.is_complete());
        let has_skills = profile.skills.len() >= MIN_SKILLS;
        let has_education = profile
            .education
            .iter()
            .any(|e| !e.school.trim().is_empty());

        let completeness_score = [
            (has_headline, HEADLINE_WEIGHT),
            (has_summary, SUMMARY_WEIGHT),
            (has_experience, EXPERIENCE_WEIGHT),
            (has_skills, SKILLS_WEIGHT),
            (has_education, EDUCATION_WEIGHT),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, weight)| weight)
        .sum::<u8>();

        StructureAnalysis {
            has_headline,
            has_summary,
            has_experience,
            has_skills,
            has_education,
            completeness_score,
        }
    }

    /// One suggestion per missing section, in section order, followed by a
    /// general warning when completeness is low
    pub fn generate_suggestions(&self, analysis: &StructureAnalysis) -> Vec<String> {
        let mut suggestions = Vec::new();

        if !analysis.has_headline {
            suggestions.push(
                "Add a professional headline that highlights your expertise and value proposition"
                    .to_string(),
            );
        }
        if !analysis.has_summary {
            suggestions.push(
                "Write a compelling summary (50+ characters) that showcases your experience and goals"
                    .to_string(),
            );
        }
        if !analysis.has_experience {
            suggestions.push(
                "Add your work experience with job titles, companies, and start dates".to_string(),
            );
        }
        if !analysis.has_skills {
            suggestions.push("List at least 3 relevant skills to improve discoverability".to_string());
        }
        if !analysis.has_education {
            suggestions.push("Include your educational background".to_string());
        }
        if analysis.completeness_score < LOW_COMPLETENESS_THRESHOLD {
            suggestions.push(
                "Focus on completing the missing sections first - they have the biggest impact on profile strength"
                    .to_string(),
            );
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::profile::{Education, Experience};

    fn complete_experience() -> Experience {
        Experience {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            start_date: "2020-01".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_profile() {
        let analyzer = StructureAnalyzer::new();
        let analysis = analyzer.analyze(&ProfileInput::default());

        assert!(!analysis.has_headline);
        assert!(!analysis.has_summary);
        assert!(!analysis.has_experience);
        assert!(!analysis.has_skills);
        assert!(!analysis.has_education);
        assert_eq!(analysis.completeness_score, 0);

        let suggestions = analyzer.generate_suggestions(&analysis);
        assert_eq!(suggestions.len(), 6);
        assert!(suggestions[0].contains("headline"));
        assert!(suggestions[5].starts_with("Focus on completing"));
    }

    #[test]
    fn test_whitespace_headline_is_missing() {
        let analyzer = StructureAnalyzer::new();
        let profile = ProfileInput {
            headline: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!analyzer.analyze(&profile).has_headline);
    }

    #[test]
    fn test_summary_needs_more_than_fifty_chars() {
        let analyzer = StructureAnalyzer::new();

        let exactly_fifty = ProfileInput {
            summary: Some(format!("  {}  ", "x".repeat(50))),
            ..Default::default()
        };
        let fifty_one = ProfileInput {
            summary: Some("x".repeat(51)),
            ..Default::default()
        };

        assert!(!analyzer.analyze(&exactly_fifty).has_summary);
        assert!(analyzer.analyze(&fifty_one).has_summary);
    }

    #[test]
    fn test_incomplete_experiences_do_not_count() {
        let analyzer = StructureAnalyzer::new();
        let mut profile = ProfileInput {
            experiences: vec![Experience {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(!analyzer.analyze(&profile).has_experience);

        profile.experiences.push(complete_experience());
        assert!(analyzer.analyze(&profile).has_experience);
    }

    #[test]
    fn test_education_requires_school() {
        let analyzer = StructureAnalyzer::new();
        let profile = ProfileInput {
            education: vec![Education {
                degree: Some("BSc".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(!analyzer.analyze(&profile).has_education);
    }

    #[test]
    fn test_weights_sum_per_section() {
        let analyzer = StructureAnalyzer::new();
        let profile = ProfileInput {
            headline: Some("Engineer".to_string()),
            experiences: vec![complete_experience()],
            skills: vec!["a".into(), "b".into(), "c".into()],
            ..Default::default()
        };

        let analysis = analyzer.analyze(&profile);
        assert_eq!(analysis.completeness_score, 20 + 30 + 15);

        let suggestions = analyzer.generate_suggestions(&analysis);
        assert_eq!(
            suggestions,
            vec![
                "Write a compelling summary (50+ characters) that showcases your experience and goals".to_string(),
                "Include your educational background".to_string(),
                "Focus on completing the missing sections first - they have the biggest impact on profile strength".to_string(),
            ]
        );
    }

    #[test]
    fn test_complete_profile_has_no_suggestions() {
        let analyzer = StructureAnalyzer::new();
        let profile = ProfileInput {
            headline: Some("Engineer".to_string()),
            summary: Some("s".repeat(80)),
            experiences: vec![complete_experience()],
            education: vec![Education {
                school: "MIT".to_string(),
                ..Default::default()
            }],
            skills: vec!["a".into(), "b".into(), "c".into()],
            ..Default::default()
        };

        let analysis = analyzer.analyze(&profile);
        assert_eq!(analysis.completeness_score, 100);
        assert!(analyzer.generate_suggestions(&analysis).is_empty());
    }
}
