use serde::{Deserialize, Serialize};

/// A named reference to a URL, optionally annotated with the folder it was
/// nested under in the source browser
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl Bookmark {
    /// Create a bookmark that is not inside any folder
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            folder: None,
        }
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// Both `name` and `url` carry text; nothing else may be persisted
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.url.is_empty()
    }
}
