//! Profile analysis engine

pub mod profile;
pub mod text_processor;
pub mod keyword_analyzer;
pub mod structure_analyzer;
pub mod readability_analyzer;
pub mod analyzer;
