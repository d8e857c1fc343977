pub mod browser;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod import_export;
pub mod kv;
pub mod models;
pub mod operations;
pub mod store;
pub mod utils;

// Re-export error types for convenience
pub use error::ArcmarksError;
pub use models::bookmark::Bookmark;
pub use store::BookmarkStore;
