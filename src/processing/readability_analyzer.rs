//! Heuristic prose quality scoring
//!
//! Runs over the headline, summary and every experience description joined
//! with single spaces. The score starts at 100 and loses points for long
//! sentences, few action verbs, few quantified results and heavy jargon.

use crate::processing::profile::ProfileInput;
use crate::processing::text_processor::{clamp_score, percentage, round_to_tenth, TextProcessor};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

const ACTIVE_VERBS: &[&str] = &[
    "achieved",
    "built",
    "created",
    "delivered",
    "designed",
    "developed",
    "drove",
    "established",
    "generated",
    "implemented",
    "improved",
    "increased",
    "launched",
    "led",
    "managed",
    "optimized",
    "reduced",
    "spearheaded",
    "streamlined",
    "transformed",
    "accelerated",
    "automated",
    "coordinated",
    "executed",
    "initiated",
    "negotiated",
];

const JARGON_WORDS: &[&str] = &[
    "synergy",
    "leverage",
    "paradigm",
    "disruptive",
    "innovative",
    "dynamic",
    "proactive",
    "best-of-breed",
    "thought leader",
    "game changer",
    "win-win",
    "value-add",
    "bleeding edge",
    "holistic",
    "robust",
];

const METRIC_PATTERNS: &[&str] = &[
    r"\d+%",
    r"\$\d+",
    r"\d+\+",
    r"(?i)\d+k",
    r"(?i)\d+m",
    r"(?i)\d+x",
    r"\d+\s*(years?|months?)",
];

const MAX_COMFORTABLE_SENTENCE_LENGTH: f64 = 20.0;
const MIN_ACTIVE_VERB_RATIO: f64 = 2.0;
const MIN_METRICS_RATIO: f64 = 1.0;
const MAX_JARGON_SCORE: f64 = 5.0;

// Absolute thresholds used only for suggestions
const MIN_ACTIVE_VERBS: usize = 5;
const MIN_METRICS: usize = 3;
const MIN_READABILITY_SCORE: u8 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadabilityAnalysis {
    pub sentence_count: usize,
    /// Words per sentence, one decimal
    pub avg_sentence_length: f64,
    pub active_verb_count: usize,
    pub metrics_count: usize,
    /// Jargon occurrences as a percentage of words, one decimal
    pub jargon_score: f64,
    pub readability_score: u8,
}

pub struct ReadabilityAnalyzer {
    text_processor: TextProcessor,
    metric_patterns: Vec<Regex>,
}

impl Default for ReadabilityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadabilityAnalyzer {
    pub fn new() -> Self {
        let metric_patterns = METRIC_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("Invalid metric regex"))
            .collect();

        Self {
            text_processor: TextProcessor::new(),
            metric_patterns,
        }
    }

    pub fn analyze(&self, profile: &ProfileInput) -> ReadabilityAnalysis {
        let text = self.collect_text(profile);

        let sentence_count = self.text_processor.count_sentences(&text);
        let word_count = self.text_processor.count_words(&text);
        let avg_sentence_length = if sentence_count == 0 {
            0.0
        } else {
            word_count as f64 / sentence_count as f64
        };
        let active_verb_count = self.count_active_verbs(&text);
        let metrics_count = self.count_metrics(&text);
        let jargon_score = self.calculate_jargon_score(&text, word_count);

        let mut score = 100.0;

        if avg_sentence_length > MAX_COMFORTABLE_SENTENCE_LENGTH {
            score -= ((avg_sentence_length - MAX_COMFORTABLE_SENTENCE_LENGTH) * 2.0).min(30.0);
        }
        if percentage(active_verb_count, word_count) < MIN_ACTIVE_VERB_RATIO {
            score -= 20.0;
        }
        if percentage(metrics_count, word_count) < MIN_METRICS_RATIO {
            score -= 15.0;
        }
        if jargon_score > MAX_JARGON_SCORE {
            score -= (jargon_score * 3.0).min(25.0);
        }

        let readability_score = clamp_score(score);
        debug!(
            "Readability: {} words, {} sentences, {} verbs, {} metrics, score {}",
            word_count, sentence_count, active_verb_count, metrics_count, readability_score
        );

        ReadabilityAnalysis {
            sentence_count,
            avg_sentence_length: round_to_tenth(avg_sentence_length),
            active_verb_count,
            metrics_count,
            jargon_score: round_to_tenth(jargon_score),
            readability_score,
        }
    }

    /// Headline, summary and experience descriptions joined with single spaces
    pub fn collect_text(&self, profile: &ProfileInput) -> String {
        let parts = [profile.headline_text(), profile.summary_text()]
            .into_iter()
            .chain(profile.experiences.iter().map(|e| e.description_text()));

        self.text_processor.join_fields(parts)
    }

    /// Sum over verbs of the words containing that verb. A word may count
    /// toward more than one verb.
    pub fn count_active_verbs(&self, text: &str) -> usize {
        let words = self.text_processor.lowercase_words(text);

        ACTIVE_VERBS
            .iter()
            .map(|verb| words.iter().filter(|w| w.contains(verb)).count())
            .sum()
    }

    /// Sum of matches across all metric patterns, each counted independently
    pub fn count_metrics(&self, text: &str) -> usize {
        self.metric_patterns
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }

    /// Jargon occurrences as a percentage of `word_count`
    pub fn calculate_jargon_score(&self, text: &str, word_count: usize) -> f64 {
        let lower = text.to_lowercase();
        let occurrences: usize = JARGON_WORDS.iter().map(|j| lower.matches(j).count()).sum();

        percentage(occurrences, word_count)
    }

    pub fn generate_suggestions(&self, analysis: &ReadabilityAnalysis) -> Vec<String> {
        let mut suggestions = Vec::new();

        if analysis.avg_sentence_length > MAX_COMFORTABLE_SENTENCE_LENGTH {
            suggestions.push(
                "Break up long sentences - aim for 15-20 words per sentence for better readability"
                    .to_string(),
            );
        }
        if analysis.active_verb_count < MIN_ACTIVE_VERBS {
            suggestions.push(
                "Use more action verbs like 'led', 'developed', 'achieved' to describe your accomplishments"
                    .to_string(),
            );
        }
        if analysis.metrics_count < MIN_METRICS {
            suggestions.push(
                "Add quantifiable achievements (percentages, dollar amounts, team sizes) to demonstrate impact"
                    .to_string(),
            );
        }
        if analysis.jargon_score > MAX_JARGON_SCORE {
            suggestions.push(
                "Reduce buzzwords and jargon - use specific, concrete language instead".to_string(),
            );
        }
        if analysis.readability_score < MIN_READABILITY_SCORE {
            suggestions.push(
                "Overall readability needs improvement - focus on clear, concise, results-oriented writing"
                    .to_string(),
            );
        }

        suggestions
    }
}
