use std::collections::HashMap;
use uuid::Uuid;

/// Trait exposing the lookup keys of an index record
///
/// String-valued keys are stored as stable i64 hashes (see
/// `crate::utils::hash_as_i64`), reference keys as UUIDs. A `None` value
/// means the key is absent for this record and must not be indexed.
pub trait Indexable {
    /// i64 lookup keys by key name
    fn i64_keys(&self) -> HashMap<String, Option<i64>>;

    /// UUID lookup keys by key name
    fn uuid_keys(&self) -> HashMap<String, Option<Uuid>>;
}
