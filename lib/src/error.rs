/// Error type for the arcmarks library
///
/// Parsing the sidebar and reconciling imports never produce one of these;
/// they report soft absence as an empty list. Errors come from the storage
/// substrate, the configuration file, and validation of manual input.
#[derive(Debug, thiserror::Error)]
pub enum ArcmarksError {
    /// Storage errors (SQLite)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL rejected at the input boundary
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Bookmark index out of range
    #[error("No bookmark at index {0}")]
    BookmarkNotFound(usize),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Interactive picker errors
    #[error("Picker error: {0}")]
    Picker(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using ArcmarksError
pub type Result<T> = std::result::Result<T, ArcmarksError>;

impl From<serde_yaml::Error> for ArcmarksError {
    fn from(err: serde_yaml::Error) -> Self {
        ArcmarksError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for ArcmarksError {
    fn from(err: serde_json::Error) -> Self {
        ArcmarksError::Json(err.to_string())
    }
}

// nucleo_picker::PickError is not re-exported, so picker failures are
// converted with map_err in fuzzy.rs
