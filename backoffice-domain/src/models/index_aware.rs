use super::index::Index;

/// Trait for models that maintain a secondary-index record
pub trait IndexAware {
    /// The associated index type derived from this model
    type IndexType: Index;

    /// Builds the index record for the current state of the model
    fn to_index(&self) -> Self::IndexType;
}
