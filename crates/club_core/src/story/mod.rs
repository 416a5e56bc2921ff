//! Story Graph Engine.
//!
//! Holds the fixed branching narrative for each of the four categories and
//! hands out nodes during traversal. All data is static and authored; the
//! session layer (`crate::session`) drives the walk.

pub mod catalog;
pub mod fallback;
pub mod types;

pub use catalog::{AUTHORED_CATALOG, STORY_WEEK};
pub use fallback::fallback_options;
pub use types::{Category, StoryCatalog, StoryNode, StoryOption};
