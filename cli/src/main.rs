mod cli;
mod commands;
mod format;
mod output;
mod prompt;

use arcmarks::kv::SqliteKv;
use arcmarks::{config, error::Result, utils, BookmarkStore};
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger; RUST_LOG still takes precedence
    let default_filter = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if args.version {
        println!("arcmarks {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let db_path = if let Some(path) = &args.db {
        path.clone()
    } else {
        utils::get_default_datadir().join("bookmarks.db")
    };

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };

    let kv = SqliteKv::init(&db_path)?;
    let store = BookmarkStore::with_key(kv, cfg.storage_key.clone());

    cli::handle_args(args, &store, &cfg)?;

    Ok(())
}
