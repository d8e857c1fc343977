use crate::format::traits::BookmarkFormat;
use arcmarks::Bookmark;

/// The list exactly as it is stored: a JSON array of `{name, url, folder?}`
pub struct JsonBookmarks<'a>(pub &'a [Bookmark]);

impl<'a> BookmarkFormat for JsonBookmarks<'a> {
    fn to_string(&self) -> String {
        // Serializing plain strings cannot fail
        serde_json::to_string_pretty(self.0).unwrap_or_else(|_| "[]".to_string())
    }
}
