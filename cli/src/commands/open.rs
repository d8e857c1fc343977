use super::sync::SyncCommand;
use super::{AppContext, ArcCommand};
use crate::prompt;
use arcmarks::error::Result;
use arcmarks::{browser, fuzzy, operations, Bookmark};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenCommand {
    /// Open this URL without showing the picker
    pub url: Option<String>,
}

/// Entries offered by the picker, quick actions first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenAction {
    BlankPage,
    FromClipboard,
    SyncFromArc,
    Bookmark(usize),
}

impl OpenAction {
    fn label(&self, bookmarks: &[Bookmark]) -> String {
        match self {
            OpenAction::BlankPage => "New blank page".to_string(),
            OpenAction::FromClipboard => "Open from clipboard".to_string(),
            OpenAction::SyncFromArc => "Sync from Arc".to_string(),
            OpenAction::Bookmark(i) => fuzzy::bookmark_label(&bookmarks[*i]),
        }
    }
}

/// Picker entries for the current list. Syncing is only offered while the
/// list is empty.
pub fn open_actions(bookmarks: &[Bookmark]) -> Vec<OpenAction> {
    let mut actions = vec![OpenAction::BlankPage, OpenAction::FromClipboard];
    if bookmarks.is_empty() {
        actions.push(OpenAction::SyncFromArc);
    }
    actions.extend((0..bookmarks.len()).map(OpenAction::Bookmark));
    actions
}

#[cfg(windows)]
fn clipboard_text() -> Option<String> {
    clipboard_win::get_clipboard_string().ok()
}

#[cfg(not(windows))]
fn clipboard_text() -> Option<String> {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
        Ok(text) => Some(text),
        Err(e) => {
            debug!("Clipboard not available: {}", e);
            None
        }
    }
}

/// The clipboard content if it is a web URL, trimmed
fn clipboard_url(text: Option<String>) -> Option<String> {
    let text = text?;
    let text = text.trim();
    operations::is_web_url(text).then(|| text.to_string())
}

fn open_from_clipboard() -> Result<()> {
    if let Some(url) = clipboard_url(clipboard_text()) {
        return browser::open_url(&url);
    }

    debug!("Clipboard holds no web URL, asking for one");
    match prompt::input_url("URL: ", "")? {
        Some(url) => browser::open_url(&url),
        None => Ok(()),
    }
}

impl ArcCommand for OpenCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        if let Some(url) = &self.url {
            operations::validate_url(url)?;
            return browser::open_url(url);
        }

        let bookmarks = ctx.store.load()?;
        let actions = open_actions(&bookmarks);
        let labels: Vec<String> = actions.iter().map(|a| a.label(&bookmarks)).collect();

        let Some(picked) = fuzzy::pick_index(&labels)? else {
            return Ok(());
        };

        match &actions[picked] {
            OpenAction::BlankPage => browser::open_url("about:blank"),
            OpenAction::FromClipboard => open_from_clipboard(),
            OpenAction::SyncFromArc => SyncCommand {
                all: false,
                sidebar: None,
            }
            .execute(ctx),
            OpenAction::Bookmark(i) => browser::open_url(&bookmarks[*i].url),
        }
    }
}
