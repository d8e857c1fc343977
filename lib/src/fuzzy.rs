use crate::error::{ArcmarksError, Result};
use crate::models::bookmark::Bookmark;
use nucleo_picker::{Picker, Render};

/// Picker entry: the position of the option in the caller's list plus the
/// text shown and matched against
struct PickItem {
    index: usize,
    display: String,
}

/// Renderer for picker entries
struct LabelRenderer;

impl Render<PickItem> for LabelRenderer {
    type Str<'a> = &'a str;

    fn render<'a>(&self, item: &'a PickItem) -> Self::Str<'a> {
        &item.display
    }
}

/// One-line label for a bookmark: name, folder (if any), URL
pub fn bookmark_label(bookmark: &Bookmark) -> String {
    // Truncate URL so long query strings don't push the name off screen
    let max_url_len = 80;
    let url_display: String = if bookmark.url.chars().count() > max_url_len {
        bookmark.url.chars().take(max_url_len).collect()
    } else {
        bookmark.url.clone()
    };

    match &bookmark.folder {
        Some(folder) => format!("{} [{}] | {}", bookmark.name, folder, url_display),
        None => format!("{} | {}", bookmark.name, url_display),
    }
}

/// Let the user pick one of `labels`; `None` when cancelled
pub fn pick_index(labels: &[String]) -> Result<Option<usize>> {
    if labels.is_empty() {
        return Ok(None);
    }

    let mut picker = Picker::new(LabelRenderer);

    let injector = picker.injector();
    for (index, label) in labels.iter().enumerate() {
        injector.push(PickItem {
            index,
            display: label.clone(),
        });
    }

    match picker
        .pick()
        .map_err(|e| ArcmarksError::Picker(e.to_string()))?
    {
        Some(item) => Ok(Some(item.index)),
        None => Ok(None),
    }
}

/// Pick a bookmark, returning its index in `bookmarks`
pub fn pick_bookmark(bookmarks: &[Bookmark]) -> Result<Option<usize>> {
    let labels: Vec<String> = bookmarks.iter().map(bookmark_label).collect();
    pick_index(&labels)
}
