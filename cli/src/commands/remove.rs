use super::{list_position, AppContext, ArcCommand};
use arcmarks::error::Result;
use arcmarks::{fuzzy, operations};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveCommand {
    /// 1-based index; the picker is shown when absent
    pub index: Option<usize>,
}

impl ArcCommand for RemoveCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let bookmarks = ctx.store.load()?;
        if bookmarks.is_empty() {
            eprintln!("No bookmarks to remove.");
            return Ok(());
        }

        let position = match self.index {
            Some(index) => list_position(index, bookmarks.len())?,
            None => match fuzzy::pick_bookmark(&bookmarks)? {
                Some(position) => position,
                None => return Ok(()),
            },
        };

        let removed = operations::remove(ctx.store, position)?;
        eprintln!("Removed \"{}\".", removed.name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::TestEnv;
    use arcmarks::Bookmark;

    fn seeded() -> TestEnv {
        TestEnv::with_bookmarks(&[
            Bookmark::new("A", "https://a.com"),
            Bookmark::new("B", "https://b.com"),
            Bookmark::new("C", "https://c.com"),
        ])
    }

    #[test]
    fn test_remove_command() {
        let env = seeded();
        let cmd = RemoveCommand { index: Some(2) };

        cmd.execute(&env.ctx()).expect("remove should succeed");

        let names: Vec<String> = env.store.load().unwrap().into_iter().map(|b| b.name).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let env = seeded();
        let cmd = RemoveCommand { index: Some(4) };

        assert!(cmd.execute(&env.ctx()).is_err());
        assert_eq!(env.store.load().unwrap().len(), 3);
    }

    #[test]
    fn test_remove_from_empty_store() {
        let env = TestEnv::new();
        let cmd = RemoveCommand { index: Some(1) };
        assert!(cmd.execute(&env.ctx()).is_ok());
    }
}
