pub mod fleet;
pub mod hr;
pub mod inventory;
pub mod manufacturing;
pub mod projects;
