use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// The hash is stable across runs and systems: CBOR gives a deterministic
/// binary encoding and XxHash64 is seeded with a fixed 0. Index records store
/// these hashes as their string-valued lookup keys.
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_for_equal_input() {
        let a = hash_as_i64(&"SKU-0001").unwrap();
        let b = hash_as_i64(&"SKU-0001").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn hash_differs_for_different_input() {
        let a = hash_as_i64(&"SKU-0001").unwrap();
        let b = hash_as_i64(&"SKU-0002").unwrap();
        assert_ne!(a, b);
    }
}
