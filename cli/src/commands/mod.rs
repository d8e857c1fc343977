use arcmarks::config::Config;
use arcmarks::error::{ArcmarksError, Result};
use arcmarks::kv::SqliteKv;
use arcmarks::BookmarkStore;

pub struct AppContext<'a> {
    pub store: &'a BookmarkStore<SqliteKv>,
    pub config: &'a Config,
}

pub mod add;
pub mod edit;
pub mod list;
pub mod open;
pub mod remove;
pub mod sync;

pub trait ArcCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn ArcCommand>)
pub enum CommandEnum {
    Open(open::OpenCommand),
    Add(add::AddCommand),
    Remove(remove::RemoveCommand),
    Edit(edit::EditCommand),
    Sync(sync::SyncCommand),
    List(list::ListCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Open(cmd) => cmd.execute(ctx),
            Self::Add(cmd) => cmd.execute(ctx),
            Self::Remove(cmd) => cmd.execute(ctx),
            Self::Edit(cmd) => cmd.execute(ctx),
            Self::Sync(cmd) => cmd.execute(ctx),
            Self::List(cmd) => cmd.execute(ctx),
        }
    }
}

/// Convert a 1-based index from the command line into a list position
pub fn list_position(index: usize, len: usize) -> Result<usize> {
    if index == 0 || index > len {
        return Err(ArcmarksError::InvalidInput(format!(
            "index {} is out of range (1-{})",
            index, len
        )));
    }
    Ok(index - 1)
}
