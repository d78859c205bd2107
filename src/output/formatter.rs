//! Output formatters for profile analysis results

use crate::config::OutputFormat;
use crate::error::{ProfileAnalyzerError, Result};
use crate::processing::analyzer::{
    OptimizationSuggestion, Priority, ProfileAnalysisResult, SuggestionType,
};
use crate::processing::structure_analyzer::StructureAnalyzer;
use colored::{Color, Colorize};
use std::fmt::Write as _;
use std::path::Path;

/// Trait for formatting analysis results
pub trait OutputFormatter {
    fn format_result(&self, result: &ProfileAnalysisResult) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored score bands
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable reports
pub struct MarkdownFormatter {
    include_checklist: bool,
}

/// Report generator that dispatches to the formatter for a format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

fn score_band(score: u8) -> (&'static str, Color) {
    match score {
        90..=100 => ("EXCELLENT", Color::Green),
        80..=89 => ("VERY GOOD", Color::BrightGreen),
        70..=79 => ("GOOD", Color::Yellow),
        60..=69 => ("FAIR", Color::BrightYellow),
        50..=59 => ("BELOW AVG", Color::Red),
        _ => ("POOR", Color::BrightRed),
    }
}

fn section_label(kind: SuggestionType) -> &'static str {
    match kind {
        SuggestionType::Headline => "Headline",
        SuggestionType::Summary => "Summary",
        SuggestionType::Experience => "Experience",
        SuggestionType::Skills => "Skills",
    }
}

fn write_err(e: std::fmt::Error) -> ProfileAnalyzerError {
    ProfileAnalyzerError::OutputFormatting(e.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.color(Color::Blue).bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn format_score_line(&self, label: &str, score: u8) -> String {
        let (badge, color) = score_band(score);
        let badge = if self.use_colors {
            badge.color(color).bold().to_string()
        } else {
            badge.to_string()
        };
        format!("  {:<12} {:>3}/100 [{}]\n", label, score, badge)
    }

    fn format_priority(&self, priority: Priority) -> String {
        match priority {
            Priority::High => self.colorize("[HIGH]", Color::Red),
            Priority::Medium => self.colorize("[MEDIUM]", Color::Yellow),
            Priority::Low => self.colorize("[LOW]", Color::Green),
        }
    }

    fn format_suggestion(&self, index: usize, suggestion: &OptimizationSuggestion) -> String {
        let mut line = format!(
            "  {}. {} {} {}\n",
            index + 1,
            self.format_priority(suggestion.priority),
            self.colorize(&format!("({})", section_label(suggestion.suggestion_type)), Color::BrightBlack),
            suggestion.suggestion
        );
        if let Some(example) = &suggestion.example {
            line.push_str(&format!("     Example: {}\n", self.colorize(example, Color::Green)));
        }
        line
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &ProfileAnalysisResult) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("PROFILE ANALYSIS"));
        output.push_str(&self.format_score_line("Overall", result.overall_score));

        output.push_str(&self.format_header("Scores"));
        output.push_str(&self.format_score_line("Keywords", result.scores.keyword));
        output.push_str(&self.format_score_line("Structure", result.scores.structure));
        output.push_str(&self.format_score_line("Readability", result.scores.readability));
        output.push_str(&self.format_score_line("Experience", result.scores.experience));

        output.push_str(&self.format_header("Suggestions"));
        if result.suggestions.is_empty() {
            output.push_str(&format!("  {}\n", self.colorize("Nothing to improve - nice work!", Color::Green)));
        }
        for (i, suggestion) in result.suggestions.iter().enumerate() {
            output.push_str(&self.format_suggestion(i, suggestion));
        }

        if self.detailed {
            let keywords = &result.keyword_analysis;
            output.push_str(&self.format_header("Keywords"));
            writeln!(output, "  Reference terms: {}", keywords.industry_keywords.join(", ")).map_err(write_err)?;
            if !keywords.missing_keywords.is_empty() {
                writeln!(
                    output,
                    "  Missing: {}",
                    self.colorize(&keywords.missing_keywords.join(", "), Color::Red)
                )
                .map_err(write_err)?;
            }
            if !keywords.underused_keywords.is_empty() {
                writeln!(
                    output,
                    "  Underused: {}",
                    self.colorize(&keywords.underused_keywords.join(", "), Color::Yellow)
                )
                .map_err(write_err)?;
            }
            for note in &keywords.suggestions {
                writeln!(output, "  - {}", note).map_err(write_err)?;
            }

            let readability = &result.readability_analysis;
            output.push_str(&self.format_header("Readability"));
            writeln!(
                output,
                "  Sentences: {} | Avg length: {:.1} words | Action verbs: {} | Metrics: {} | Jargon: {:.1}%",
                readability.sentence_count,
                readability.avg_sentence_length,
                readability.active_verb_count,
                readability.metrics_count,
                readability.jargon_score
            )
            .map_err(write_err)?;

            output.push_str(&self.format_header("Section checklist"));
            let checklist = StructureAnalyzer::new().generate_suggestions(&result.structure_analysis);
            if checklist.is_empty() {
                writeln!(output, "  {}", self.colorize("All sections complete", Color::Green)).map_err(write_err)?;
            }
            for item in checklist {
                writeln!(output, "  - {}", item).map_err(write_err)?;
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &ProfileAnalysisResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_checklist: bool) -> Self {
        Self { include_checklist }
    }

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "Excellent",
            80..=89 => "Very Good",
            70..=79 => "Good",
            60..=69 => "Fair",
            50..=59 => "Below Average",
            _ => "Poor",
        }
    }

    fn priority_label(priority: Priority) -> &'static str {
        match priority {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_result(&self, result: &ProfileAnalysisResult) -> Result<String> {
        let mut md = String::new();

        writeln!(md, "# Profile Analysis Report\n").map_err(write_err)?;
        writeln!(
            md,
            "**Overall score:** {}/100 ({})\n",
            result.overall_score,
            Self::markdown_score_badge(result.overall_score)
        )
        .map_err(write_err)?;

        writeln!(md, "## Scores\n").map_err(write_err)?;
        writeln!(md, "| Component | Score |").map_err(write_err)?;
        writeln!(md, "|-----------|-------|").map_err(write_err)?;
        for (label, score) in [
            ("Keywords", result.scores.keyword),
            ("Structure", result.scores.structure),
            ("Readability", result.scores.readability),
            ("Experience", result.scores.experience),
        ] {
            writeln!(md, "| {} | {} |", label, score).map_err(write_err)?;
        }

        writeln!(md, "\n## Suggestions\n").map_err(write_err)?;
        for (i, s) in result.suggestions.iter().enumerate() {
            writeln!(
                md,
                "{}. **{}** ({} priority): {}",
                i + 1,
                section_label(s.suggestion_type),
                Self::priority_label(s.priority),
                s.suggestion
            )
            .map_err(write_err)?;
            if let Some(example) = &s.example {
                writeln!(md, "   > Example: {}", example).map_err(write_err)?;
            }
        }

        let keywords = &result.keyword_analysis;
        if !keywords.missing_keywords.is_empty() || !keywords.underused_keywords.is_empty() {
            writeln!(md, "\n## Keywords\n").map_err(write_err)?;
            if !keywords.missing_keywords.is_empty() {
                writeln!(md, "- Missing: {}", keywords.missing_keywords.join(", ")).map_err(write_err)?;
            }
            if !keywords.underused_keywords.is_empty() {
                writeln!(md, "- Underused: {}", keywords.underused_keywords.join(", ")).map_err(write_err)?;
            }
        }

        if self.include_checklist {
            writeln!(md, "\n## Section Checklist\n").map_err(write_err)?;
            let s = &result.structure_analysis;
            for (label, present) in [
                ("Headline", s.has_headline),
                ("Summary", s.has_summary),
                ("Experience", s.has_experience),
                ("Skills", s.has_skills),
                ("Education", s.has_education),
            ] {
                writeln!(md, "- [{}] {}", if present { "x" } else { " " }, label).map_err(write_err)?;
            }
            for item in StructureAnalyzer::new().generate_suggestions(s) {
                writeln!(md, "\n> {}", item).map_err(write_err)?;
            }
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(detailed),
        }
    }

    pub fn generate_report(&self, result: &ProfileAnalysisResult, format: OutputFormat) -> Result<String> {
        let formatter: &dyn OutputFormatter = match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
        };
        formatter.format_result(result)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
