//! Reader for Arc's `StorableSidebar.json`.
//!
//! The sidebar is a flat array of items that reference each other through
//! `parentID` / `childrenIds`. Folders are resolved with a single id → title
//! lookup per tab, so cycles or very deep nesting in the source cannot
//! cause trouble.

use crate::models::bookmark::Bookmark;
use log::{debug, warn};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name Arc stores its sidebar state under
pub const SIDEBAR_FILE_NAME: &str = "StorableSidebar.json";

/// Environment variable that points at a sidebar file explicitly
pub const SIDEBAR_ENV: &str = "ARCMARKS_SIDEBAR";

/// Deserialize a field that may be missing or carry an unexpected type.
///
/// A mistyped field reads as `None` instead of failing the whole item.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// Tab payload of a sidebar item
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SidebarTab {
    #[serde(rename = "savedURL", default, deserialize_with = "lenient")]
    pub saved_url: Option<String>,
    #[serde(rename = "savedTitle", default, deserialize_with = "lenient")]
    pub saved_title: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SidebarItemData {
    #[serde(default, deserialize_with = "lenient")]
    tab: Option<SidebarTab>,
}

/// One node of the sidebar tree. Every field may be missing or mistyped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SidebarItem {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    // Both spellings occur; kept apart so an item carrying both still reads
    #[serde(rename = "parentID", default, deserialize_with = "lenient")]
    parent_id_upper: Option<String>,
    #[serde(rename = "parentId", default, deserialize_with = "lenient")]
    parent_id_lower: Option<String>,
    // Only the count matters, so entries of any type are accepted
    #[serde(rename = "childrenIds", default, deserialize_with = "lenient")]
    children_ids: Option<Vec<serde_json::Value>>,
    #[serde(default, deserialize_with = "lenient")]
    data: Option<SidebarItemData>,
    #[serde(rename = "tab", default, deserialize_with = "lenient")]
    bare_tab: Option<SidebarTab>,
}

impl SidebarItem {
    /// Tab record, found either under `data.tab` or directly on the item
    pub fn tab(&self) -> Option<&SidebarTab> {
        self.data
            .as_ref()
            .and_then(|d| d.tab.as_ref())
            .or(self.bare_tab.as_ref())
    }

    /// Id of the containing node, `parentID` taking precedence over `parentId`
    pub fn parent_id(&self) -> Option<&str> {
        non_empty(self.parent_id_upper.as_deref())
            .or_else(|| non_empty(self.parent_id_lower.as_deref()))
    }

    fn has_children(&self) -> bool {
        self.children_ids.as_ref().is_some_and(|c| !c.is_empty())
    }

    fn folder_title(&self) -> Option<(&str, &str)> {
        if !self.has_children() || self.tab().is_some() {
            return None;
        }
        let id = non_empty(self.id.as_deref())?;
        let title = non_empty(self.title.as_deref())?;
        Some((id, title))
    }
}

/// Entries of the items array: either an item wrapped in `value`, or
/// anything else (bare id strings, unexpected shapes), which is ignored
#[derive(Deserialize)]
#[serde(untagged)]
enum SidebarEntry {
    Wrapped { value: SidebarItem },
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SidebarSyncState {
    #[serde(default)]
    items: Option<Vec<SidebarEntry>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StorableSidebar {
    #[serde(default)]
    sidebar_sync_state: Option<SidebarSyncState>,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Extract the sidebar items from a raw document.
///
/// Returns `None` when the document cannot be read or has no item array.
pub fn read_items(raw: &[u8]) -> Option<Vec<SidebarItem>> {
    let mut buf = raw.to_vec();
    let doc: StorableSidebar = match simd_json::serde::from_slice(&mut buf) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Sidebar document is not readable JSON: {}", e);
            return None;
        }
    };

    let entries = doc.sidebar_sync_state?.items?;
    let items: Vec<SidebarItem> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            SidebarEntry::Wrapped { value } => Some(value),
            SidebarEntry::Other(_) => None,
        })
        .collect();
    Some(items)
}

/// Flatten sidebar items into bookmarks, in source order.
///
/// Pass one indexes folder titles by id, pass two emits one bookmark per
/// tab item that has a URL and a usable name.
pub fn flatten(items: &[SidebarItem]) -> Vec<Bookmark> {
    let folder_names: HashMap<&str, &str> =
        items.iter().filter_map(SidebarItem::folder_title).collect();

    let mut bookmarks = Vec::new();
    for item in items {
        let Some(tab) = item.tab() else { continue };
        let Some(url) = non_empty(tab.saved_url.as_deref()) else {
            continue;
        };
        let Some(name) =
            non_empty(item.title.as_deref()).or_else(|| non_empty(tab.saved_title.as_deref()))
        else {
            continue;
        };

        let folder = item
            .parent_id()
            .and_then(|parent| folder_names.get(parent))
            .map(|title| title.to_string());

        bookmarks.push(Bookmark {
            name: name.to_string(),
            url: url.to_string(),
            folder,
        });
    }

    debug!(
        "Flattened {} sidebar items ({} folders) into {} bookmarks",
        items.len(),
        folder_names.len(),
        bookmarks.len()
    );
    bookmarks
}

/// Parse a raw `StorableSidebar.json` document into bookmarks.
///
/// Unreadable documents yield an empty list.
pub fn parse(raw: &[u8]) -> Vec<Bookmark> {
    match read_items(raw) {
        Some(items) => flatten(&items),
        None => Vec::new(),
    }
}

/// Read and parse the sidebar file at `path`; a missing file yields an empty list
pub fn read_sidebar(path: &Path) -> Vec<Bookmark> {
    match fs::read(path) {
        Ok(raw) => parse(&raw),
        Err(e) => {
            warn!("Cannot read Arc sidebar at {:?}: {}", path, e);
            Vec::new()
        }
    }
}

/// Where to look for the sidebar file.
///
/// `ARCMARKS_SIDEBAR` wins over `configured`, which wins over the
/// platform default location.
pub fn locate_sidebar(configured: Option<&Path>) -> Option<PathBuf> {
    let from_env = std::env::var(SIDEBAR_ENV).ok();
    explicit_sidebar_path(from_env.as_deref(), configured).or_else(default_sidebar_path)
}

/// Explicitly requested sidebar file; a non-empty env value beats `configured`
fn explicit_sidebar_path(from_env: Option<&str>, configured: Option<&Path>) -> Option<PathBuf> {
    match from_env.filter(|path| !path.is_empty()) {
        Some(path) => Some(PathBuf::from(path)),
        None => configured.map(Path::to_path_buf),
    }
}

/// Platform default location of the sidebar file
pub fn default_sidebar_path() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        let home = std::env::var("HOME").ok()?;
        let path = PathBuf::from(home)
            .join("Library/Application Support/Arc")
            .join(SIDEBAR_FILE_NAME);
        debug!("Expecting Arc sidebar at: {:?}", path);
        Some(path)
    }

    #[cfg(target_os = "windows")]
    {
        // Arc ships as a Store package, its folder name carries a publisher suffix
        let packages = PathBuf::from(std::env::var("LOCALAPPDATA").ok()?).join("Packages");
        for entry in fs::read_dir(&packages).ok()?.flatten() {
            let name = entry.file_name();
            if name.to_string_lossy().starts_with("TheBrowserCompany.Arc") {
                let path = entry
                    .path()
                    .join("LocalCache/Local/Arc")
                    .join(SIDEBAR_FILE_NAME);
                if path.exists() {
                    debug!("Found Arc sidebar at: {:?}", path);
                    return Some(path);
                }
            }
        }
        None
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        None
    }
}
