pub mod bill_of_material;
pub mod production_order;
pub mod routing;

// Re-exports
pub use bill_of_material::*;
pub use production_order::*;
pub use routing::*;
