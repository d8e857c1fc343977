pub mod reconcile;
pub mod sidebar;

// Re-export the import pipeline entry points (used by CLI)
pub use reconcile::{candidates, merge, plan_import, ImportPlan};
pub use sidebar::{locate_sidebar, parse, read_sidebar};
