//! Read-modify-write operations on the bookmark list.
//!
//! Each operation loads the whole list, changes it in memory and saves it
//! back in one call. When validation fails nothing is written.

use crate::error::{ArcmarksError, Result};
use crate::kv::KeyValueStore;
use crate::models::bookmark::Bookmark;
use crate::store::BookmarkStore;
use url::Url;

/// Reject anything that is not an absolute URL
pub fn validate_url(input: &str) -> Result<()> {
    Url::parse(input)
        .map(|_| ())
        .map_err(|e| ArcmarksError::InvalidUrl {
            url: input.to_string(),
            reason: e.to_string(),
        })
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ArcmarksError::InvalidInput(
            "bookmark name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Default display name for a manually added URL: its host without `www.`
pub fn suggested_name(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.host_str()
                .map(|host| host.strip_prefix("www.").unwrap_or(host).to_string())
        })
        .unwrap_or_default()
}

/// Whether text (e.g. clipboard content) looks like a web address
pub fn is_web_url(text: &str) -> bool {
    let text = text.trim();
    text.starts_with("http://") || text.starts_with("https://")
}

/// Append a new bookmark outside of any folder
pub fn add<S: KeyValueStore>(store: &BookmarkStore<S>, name: &str, url: &str) -> Result<Bookmark> {
    validate_url(url)?;
    validate_name(name)?;

    let mut bookmarks = store.load()?;
    let bookmark = Bookmark::new(name, url);
    bookmarks.push(bookmark.clone());
    store.save(&bookmarks)?;
    Ok(bookmark)
}

/// Replace name and URL of the entry at `index`, keeping its folder
pub fn edit<S: KeyValueStore>(
    store: &BookmarkStore<S>,
    index: usize,
    name: &str,
    url: &str,
) -> Result<Bookmark> {
    validate_url(url)?;
    validate_name(name)?;

    let mut bookmarks = store.load()?;
    let slot = bookmarks
        .get_mut(index)
        .ok_or(ArcmarksError::BookmarkNotFound(index))?;

    let folder = slot.folder.take();
    *slot = Bookmark {
        name: name.to_string(),
        url: url.to_string(),
        folder,
    };
    let updated = slot.clone();

    store.save(&bookmarks)?;
    Ok(updated)
}

/// Remove and return the entry at `index`
pub fn remove<S: KeyValueStore>(store: &BookmarkStore<S>, index: usize) -> Result<Bookmark> {
    let mut bookmarks = store.load()?;
    if index >= bookmarks.len() {
        return Err(ArcmarksError::BookmarkNotFound(index));
    }

    let removed = bookmarks.remove(index);
    store.save(&bookmarks)?;
    Ok(removed)
}
