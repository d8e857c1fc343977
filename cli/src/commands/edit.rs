use super::{list_position, AppContext, ArcCommand};
use crate::prompt;
use arcmarks::error::Result;
use arcmarks::{fuzzy, operations};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditCommand {
    /// 1-based index; the picker is shown when absent
    pub index: Option<usize>,
    pub url: Option<String>,
    pub name: Option<String>,
}

impl ArcCommand for EditCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let bookmarks = ctx.store.load()?;
        if bookmarks.is_empty() {
            eprintln!("No bookmarks to edit.");
            return Ok(());
        }

        let position = match self.index {
            Some(index) => list_position(index, bookmarks.len())?,
            None => match fuzzy::pick_bookmark(&bookmarks)? {
                Some(position) => position,
                None => return Ok(()),
            },
        };
        let current = &bookmarks[position];

        let url = match &self.url {
            Some(url) => url.clone(),
            None => match prompt::input_url("URL: ", &current.url)? {
                Some(url) => url,
                None => return Ok(()),
            },
        };

        let name = match &self.name {
            Some(name) => name.clone(),
            // Only --url given: keep the current name
            None if self.url.is_some() => current.name.clone(),
            None => match prompt::input("Bookmark name: ", &current.name)? {
                Some(name) => name,
                None => return Ok(()),
            },
        };

        let updated = operations::edit(ctx.store, position, &name, &url)?;
        eprintln!("Updated \"{}\".", updated.name);
        Ok(())
    }
}
