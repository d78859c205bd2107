//! Profile file format detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Json,
    Toml,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "json" => FileType::Json,
            "toml" => FileType::Toml,
            _ => FileType::Unknown,
        }
    }
}
