pub mod delivery;
pub mod fuel_log;
pub mod maintenance_order;
pub mod vehicle;

// Re-exports
pub use delivery::*;
pub use fuel_log::*;
pub use maintenance_order::*;
pub use vehicle::*;
