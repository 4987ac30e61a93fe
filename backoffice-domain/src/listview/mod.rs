pub mod aggregate;
pub mod controller;
pub mod filter;
pub mod presentation;

// Re-exports
pub use aggregate::*;
pub use controller::*;
pub use filter::*;
pub use presentation::*;
