pub mod identifiable;
pub mod index;
pub mod index_aware;
pub mod indexable;
pub mod primary_key;

pub mod fleet;
pub mod hr;
pub mod inventory;
pub mod manufacturing;
pub mod projects;

// Re-exports
pub use identifiable::*;
pub use index::*;
pub use index_aware::*;
pub use indexable::*;
pub use primary_key::*;
