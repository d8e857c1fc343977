use crate::{
    format::{json::JsonBookmarks, plain::PlainBookmark, traits::BookmarkFormat},
    output::colorize::{Colorize, ColorizeBookmark},
};
use arcmarks::Bookmark;

pub mod json;
pub mod plain;
pub mod traits;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Colored,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Colored,
        }
    }

    /// Render the whole list; plain text numbers entries from 1
    pub fn render(self, records: &[Bookmark], no_color: bool) -> String {
        match self {
            OutputFormat::Json => JsonBookmarks(records).to_string(),
            OutputFormat::Colored => records
                .iter()
                .enumerate()
                .map(|(i, b)| {
                    if no_color {
                        PlainBookmark(i + 1, b).to_string()
                    } else {
                        ColorizeBookmark(i + 1, b).to_colored()
                    }
                })
                .collect(),
        }
    }

    pub fn print_bookmarks(self, records: &[Bookmark], no_color: bool) {
        print!("{}", self.render(records, no_color));
        if self == OutputFormat::Json {
            println!();
        }
    }
}
