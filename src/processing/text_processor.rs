//! Text helpers shared by the analyzers

use regex::Regex;

pub struct TextProcessor {
    sentence_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let sentence_regex = Regex::new(r"[.!?]+").expect("Invalid sentence regex");

        Self { sentence_regex }
    }

    /// Count sentence fragments split on runs of `.`, `!` or `?`
    pub fn count_sentences(&self, text: &str) -> usize {
        self.sentence_regex
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count()
    }

    /// Count whitespace separated tokens
    pub fn count_words(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }

    /// Lower-cased whitespace tokens
    pub fn lowercase_words(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|w| w.to_lowercase()).collect()
    }

    /// Join text fragments with single spaces, keeping empty fragments in place
    pub fn join_fields<'a, I>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        parts.into_iter().collect::<Vec<_>>().join(" ")
    }
}

/// `part / whole * 100`, or 0 when `whole` is zero
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamp to 0..=100 and round to the nearest integer
pub fn clamp_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_counting() {
        let processor = TextProcessor::new();

        assert_eq!(processor.count_sentences("One. Two! Three?"), 3);
        assert_eq!(processor.count_sentences("Wait... what?!"), 2);
        assert_eq!(processor.count_sentences("No terminator"), 1);
        assert_eq!(processor.count_sentences("  ...  "), 0);
        assert_eq!(processor.count_sentences(""), 0);
    }

    #[test]
    fn test_word_counting() {
        let processor = TextProcessor::new();

        assert_eq!(processor.count_words("  led   a team\nof eight "), 5);
        assert_eq!(processor.count_words(""), 0);
        assert_eq!(
            processor.lowercase_words("Led Teams"),
            vec!["led".to_string(), "teams".to_string()]
        );
    }

    #[test]
    fn test_join_keeps_empty_fields() {
        let processor = TextProcessor::new();
        assert_eq!(processor.join_fields(["a", "", "b"]), "a  b");
    }

    #[test]
    fn test_percentage_guards_zero() {
        assert_eq!(percentage(3, 0), 0.0);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round_to_tenth(12.345), 12.3);
        assert_eq!(clamp_score(-12.0), 0);
        assert_eq!(clamp_score(150.0), 100);
        assert_eq!(clamp_score(84.5), 85);
    }
}
