pub mod error;
pub mod repository;
pub mod store;

#[cfg(feature = "fixtures")]
pub mod fixtures;

// Re-exports
pub use error::StoreError;
pub use store::InMemoryRepository;
