pub mod employee;
pub mod evaluation;

// Re-exports
pub use employee::*;
pub use evaluation::*;
