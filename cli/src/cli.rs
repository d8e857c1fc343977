use crate::commands::add::AddCommand;
use crate::commands::edit::EditCommand;
use crate::commands::list::ListCommand;
use crate::commands::open::OpenCommand;
use crate::commands::remove::RemoveCommand;
use crate::commands::sync::SyncCommand;
use crate::commands::{AppContext, CommandEnum};
use arcmarks::config::Config;
use arcmarks::error::Result;
use arcmarks::kv::SqliteKv;
use arcmarks::BookmarkStore;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom database file path
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search bookmarks or pick a quick action (default)
    Open {
        /// Open this URL directly instead of showing the picker
        #[arg(long)]
        url: Option<String>,
    },

    /// Add a new bookmark
    Add {
        /// URL to bookmark (prompted for when omitted)
        url: Option<String>,

        /// Bookmark name (defaults to the URL's host)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Remove a bookmark
    Remove {
        /// Bookmark index as shown by `list` (picker when omitted)
        index: Option<usize>,
    },

    /// Edit a bookmark's URL and name
    Edit {
        /// Bookmark index as shown by `list` (picker when omitted)
        index: Option<usize>,

        /// New URL
        #[arg(long)]
        url: Option<String>,

        /// New name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Import bookmarks from the Arc sidebar
    Sync {
        /// Import every new bookmark without asking
        #[arg(short, long)]
        all: bool,

        /// Read this StorableSidebar.json instead of the default location
        #[arg(long)]
        sidebar: Option<PathBuf>,
    },

    /// Print all bookmarks
    List {
        /// Output format: json or plain (default)
        #[arg(short, long)]
        format: Option<String>,
    },
}

pub fn handle_args(cli: Cli, store: &BookmarkStore<SqliteKv>, config: &Config) -> Result<()> {
    let command = match cli.command {
        None => CommandEnum::Open(OpenCommand { url: None }),
        Some(Commands::Open { url }) => CommandEnum::Open(OpenCommand { url }),
        Some(Commands::Add { url, name }) => CommandEnum::Add(AddCommand { url, name }),
        Some(Commands::Remove { index }) => CommandEnum::Remove(RemoveCommand { index }),
        Some(Commands::Edit { index, url, name }) => {
            CommandEnum::Edit(EditCommand { index, url, name })
        }
        Some(Commands::Sync { all, sidebar }) => CommandEnum::Sync(SyncCommand { all, sidebar }),
        Some(Commands::List { format }) => CommandEnum::List(ListCommand { format, nc: cli.nc }),
    };

    let ctx = AppContext { store, config };
    command.execute(&ctx)
}
