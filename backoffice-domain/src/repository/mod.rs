pub mod create_batch;
pub mod delete_batch;
pub mod exist_by_ids;
pub mod find_by_id;
pub mod find_indices_by_ids;
pub mod list;
pub mod load;
pub mod load_batch;
pub mod pagination;
pub mod update_batch;

// Re-exports
pub use create_batch::*;
pub use delete_batch::*;
pub use exist_by_ids::*;
pub use find_by_id::*;
pub use find_indices_by_ids::*;
pub use list::*;
pub use load::*;
pub use load_batch::*;
pub use pagination::*;
pub use update_batch::*;
