//! Input processing module
//! Handles file detection, profile parsing, and input management

pub mod file_detector;
pub mod profile_reader;
pub mod manager;

pub use manager::InputManager;
