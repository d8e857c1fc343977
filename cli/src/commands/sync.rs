use super::{AppContext, ArcCommand};
use crate::prompt;
use arcmarks::error::Result;
use arcmarks::fuzzy::bookmark_label;
use arcmarks::import_export::{locate_sidebar, merge, plan_import, read_sidebar, ImportPlan};
use arcmarks::Bookmark;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncCommand {
    /// Import every candidate without asking
    pub all: bool,
    /// Explicit sidebar file, taking precedence over the config
    pub sidebar: Option<PathBuf>,
}

impl SyncCommand {
    fn read_source(&self, ctx: &AppContext) -> Vec<Bookmark> {
        let configured = self
            .sidebar
            .as_deref()
            .or(ctx.config.sidebar_path.as_deref());

        match locate_sidebar(configured) {
            Some(path) => {
                debug!("Reading Arc sidebar from {}", path.display());
                read_sidebar(&path)
            }
            None => {
                debug!("No Arc sidebar file found");
                Vec::new()
            }
        }
    }

    /// Which candidates to import; an empty result means nothing changes
    fn select(&self, candidates: Vec<Bookmark>) -> Result<Vec<Bookmark>> {
        if self.all {
            return Ok(candidates);
        }

        eprintln!("Select bookmarks to import:");
        for (i, bookmark) in candidates.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, bookmark_label(bookmark));
        }

        let Some(answer) = prompt::input("Import (e.g. 1 3 5-7, * for all): ", "*")? else {
            return Ok(Vec::new());
        };

        let picked = prompt::parse_selection(&answer, candidates.len());
        Ok(candidates
            .into_iter()
            .enumerate()
            .filter(|(i, _)| picked.contains(i))
            .map(|(_, b)| b)
            .collect())
    }
}

impl ArcCommand for SyncCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let imported = self.read_source(ctx);
        let current = ctx.store.load()?;

        let candidates = match plan_import(&current, &imported) {
            ImportPlan::SourceEmpty => {
                eprintln!("No bookmarks found in Arc. Is Arc installed?");
                return Ok(());
            }
            ImportPlan::AlreadySynced => {
                eprintln!("All Arc bookmarks already synced.");
                return Ok(());
            }
            ImportPlan::Candidates(candidates) => candidates,
        };
        info!(
            "{} of {} Arc bookmarks are new",
            candidates.len(),
            imported.len()
        );

        let selected = self.select(candidates)?;
        if selected.is_empty() {
            return Ok(());
        }

        ctx.store.save(&merge(&current, &selected))?;
        eprintln!("Imported {} bookmarks from Arc.", selected.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use std::fs;
    use tempfile::TempDir;

    const SIDEBAR: &str = r#"{
        "sidebarSyncState": {
            "items": [
                "f1",
                {"value": {"id": "f1", "title": "Dev", "childrenIds": ["t1"], "data": {}}},
                "t1",
                {"value": {"id": "t1", "parentID": "f1", "title": "Rust",
                    "data": {"tab": {"savedURL": "https://rust-lang.org", "savedTitle": "Rust Lang"}}}},
                "t2",
                {"value": {"id": "t2", "title": null,
                    "data": {"tab": {"savedURL": "https://example.com", "savedTitle": "Example"}}}}
            ]
        }
    }"#;

    fn write_sidebar(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("StorableSidebar.json");
        fs::write(&path, SIDEBAR).expect("Failed to write sidebar");
        path
    }

    #[test]
    fn test_sync_imports_everything_with_all() {
        let dir = TempDir::new().unwrap();
        let env = TestEnv::new();
        let cmd = SyncCommand {
            all: true,
            sidebar: Some(write_sidebar(&dir)),
        };

        cmd.execute(&env.ctx()).expect("sync should succeed");

        let records = env.store.load().unwrap();
        assert_eq!(
            records,
            vec![
                Bookmark::new("Rust", "https://rust-lang.org").with_folder("Dev"),
                Bookmark::new("Example", "https://example.com"),
            ]
        );
    }

    #[test]
    fn test_sync_skips_known_urls() {
        let dir = TempDir::new().unwrap();
        let env = TestEnv::with_bookmarks(&[Bookmark::new("Mine", "https://example.com")]);
        let cmd = SyncCommand {
            all: true,
            sidebar: Some(write_sidebar(&dir)),
        };

        cmd.execute(&env.ctx()).expect("sync should succeed");

        let records = env.store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Mine");
        assert_eq!(records[1].url, "https://rust-lang.org");
    }

    #[test]
    fn test_sync_twice_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let env = TestEnv::new();
        let cmd = SyncCommand {
            all: true,
            sidebar: Some(write_sidebar(&dir)),
        };

        cmd.execute(&env.ctx()).unwrap();
        cmd.execute(&env.ctx()).unwrap();

        assert_eq!(env.store.load().unwrap().len(), 2);
    }

    #[test]
    fn test_sync_missing_sidebar() {
        let dir = TempDir::new().unwrap();
        let env = TestEnv::with_bookmarks(&[Bookmark::new("A", "https://a.com")]);
        let cmd = SyncCommand {
            all: true,
            sidebar: Some(dir.path().join("missing.json")),
        };

        cmd.execute(&env.ctx()).expect("missing sidebar is not an error");
        assert_eq!(env.store.load().unwrap().len(), 1);
    }
}
