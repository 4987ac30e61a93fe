pub mod category;
pub mod item;

// Re-exports
pub use category::*;
pub use item::*;
