use uuid::Uuid;

/// Trait for records addressable by a UUID primary key in a cache or store
pub trait HasPrimaryKey {
    /// Returns the primary key of the record
    fn primary_key(&self) -> Uuid;
}
