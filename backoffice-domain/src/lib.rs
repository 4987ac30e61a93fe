pub mod cache;
pub mod listview;
pub mod models;
pub mod repository;
pub mod utils;

// Re-exports
pub use cache::*;
pub use models::{HasPrimaryKey, Identifiable, Index, IndexAware, Indexable};
