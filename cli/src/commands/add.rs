use super::{AppContext, ArcCommand};
use crate::prompt;
use arcmarks::error::Result;
use arcmarks::operations;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommand {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl ArcCommand for AddCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let url = match &self.url {
            Some(url) => {
                operations::validate_url(url)?;
                url.clone()
            }
            None => match prompt::input_url("URL: ", "")? {
                Some(url) => url,
                None => return Ok(()),
            },
        };

        let name = match &self.name {
            Some(name) => name.clone(),
            None => {
                let suggested = operations::suggested_name(&url);
                match prompt::input("Bookmark name: ", &suggested)? {
                    Some(name) => name,
                    None => return Ok(()),
                }
            }
        };

        let bookmark = operations::add(ctx.store, &name, &url)?;
        eprintln!("Bookmark \"{}\" saved.", bookmark.name);
        Ok(())
    }
}
