pub mod budget_line;
pub mod project;

// Re-exports
pub use budget_line::*;
pub use project::*;
