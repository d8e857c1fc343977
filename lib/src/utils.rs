//! Where arcmarks keeps its files.

use std::path::PathBuf;

const APP_DIR: &str = "arcmarks";

/// Environment variable that points the bookmark database somewhere else
pub const DATA_DIR_ENV: &str = "ARCMARKS_DATA_DIR";

/// The two kinds of per-user directory arcmarks uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirKind {
    Data,
    Config,
}

impl DirKind {
    fn xdg_var(self) -> &'static str {
        match self {
            DirKind::Data => "XDG_DATA_HOME",
            DirKind::Config => "XDG_CONFIG_HOME",
        }
    }

    /// Location under `$HOME` when no XDG variable is set
    fn home_suffix(self) -> &'static str {
        match self {
            DirKind::Data => ".local/share",
            DirKind::Config => ".config",
        }
    }
}

/// Resolve the app directory of `kind` from a variable lookup.
///
/// Order: XDG variable, `$HOME` suffix, `%APPDATA%`, current directory.
fn app_dir(kind: DirKind, var: impl Fn(&str) -> Option<String>) -> PathBuf {
    let base = var(kind.xdg_var())
        .map(PathBuf::from)
        .or_else(|| var("HOME").map(|home| PathBuf::from(home).join(kind.home_suffix())))
        .or_else(|| var("APPDATA").map(PathBuf::from));

    match base {
        Some(base) => base.join(APP_DIR),
        None => std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(APP_DIR),
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Directory holding the bookmark database; `ARCMARKS_DATA_DIR` wins
pub fn get_default_datadir() -> PathBuf {
    match env_var(DATA_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => app_dir(DirKind::Data, env_var),
    }
}

/// Directory holding `config.yml`
pub fn get_config_dir() -> PathBuf {
    app_dir(DirKind::Config, env_var)
}
