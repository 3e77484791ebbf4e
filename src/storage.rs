//! The [`GraphStorage`] external interface (SPEC_FULL §6) and its in-memory
//! reference implementation.
//!
//! Envelope-versioning and bincode-via-`config::standard()` conventions grounded
//! on the teacher's `cache/envelope.rs` (`CacheEnvelope`/`CACHE_VERSION`); the
//! per-project-uuid write serialization is new to this crate (§5 "Shared
//! resources": "writes are serialized per `project_uuid`... one
//! `parking_lot::Mutex` per project_uuid bucket").

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ResolverError, Result};
use crate::model::SymbolNameKey;

/// Current envelope format version. Bump when the wrapped value's shape changes
/// in a way that breaks decoding of previously-written bytes.
pub const STORAGE_ENVELOPE_VERSION: u32 = 1;

/// Wraps an encoded value with a format version, so optional fields added later
/// to `SymbolOccurrence`/`FileElementTable` stay forward-compatible (§6
/// "Serialization").
#[derive(Serialize, Deserialize)]
struct StorageEnvelope {
    version: u32,
    bytes: Vec<u8>,
}

/// Required external interface a caller supplies to persist and retrieve
/// occurrences (§6). Implementors must be safe for concurrent reads; writes
/// should be serialized per `project_uuid`.
#[async_trait]
pub trait GraphStorage: Send + Sync {
    /// Returns [`ResolverError::NotFound`] (not a panic-level error) when the key
    /// is absent.
    async fn get(&self, project_uuid: &str, key: &SymbolNameKey) -> Result<Vec<u8>>;

    /// Atomic per call: either every item in `items` is durably written, or none
    /// are.
    async fn batch_save(&self, project_uuid: &str, items: Vec<(SymbolNameKey, Vec<u8>)>) -> Result<()>;
}

/// Encodes `key` as a versioned, stable-across-runs byte string (§6 "Keys").
pub fn encode_key(key: &SymbolNameKey) -> Result<Vec<u8>> {
    bincode::serde::encode_to_vec(key, bincode::config::standard())
        .map_err(|e| ResolverError::DecodeError(e.to_string()))
}

/// Encodes `value` wrapped in a [`StorageEnvelope`] carrying the current format
/// version (§6 "Serialization").
pub fn encode_value<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let bytes = bincode::serde::encode_to_vec(value, bincode::config::standard())
        .map_err(|e| ResolverError::DecodeError(e.to_string()))?;
    let envelope = StorageEnvelope { version: STORAGE_ENVELOPE_VERSION, bytes };
    bincode::serde::encode_to_vec(&envelope, bincode::config::standard())
        .map_err(|e| ResolverError::DecodeError(e.to_string()))
}

/// Decodes bytes previously produced by [`encode_value`], ignoring an envelope
/// whose version does not match the current one by treating it as
/// [`ResolverError::DecodeError`] — the caller is expected to proceed as if the
/// key were absent (§7).
pub fn decode_value<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let (envelope, _): (StorageEnvelope, usize) =
        bincode::serde::decode_from_slice(bytes, bincode::config::standard())
            .map_err(|e| ResolverError::DecodeError(e.to_string()))?;
    if envelope.version != STORAGE_ENVELOPE_VERSION {
        return Err(ResolverError::DecodeError(format!(
            "unsupported envelope version {}",
            envelope.version
        )));
    }
    bincode::serde::decode_from_slice(&envelope.bytes, bincode::config::standard())
        .map(|(value, _)| value)
        .map_err(|e| ResolverError::DecodeError(e.to_string()))
}

/// Reference `GraphStorage` implementation: an in-memory map, one
/// `parking_lot::Mutex`-guarded bucket per `project_uuid` so writes to distinct
/// projects never contend (§5).
#[derive(Default)]
pub struct InMemoryGraphStorage {
    buckets: Mutex<HashMap<String, Arc<Mutex<HashMap<Vec<u8>, Vec<u8>>>>>>,
}

impl InMemoryGraphStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket(&self, project_uuid: &str) -> Arc<Mutex<HashMap<Vec<u8>, Vec<u8>>>> {
        self.buckets
            .lock()
            .entry(project_uuid.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(HashMap::new())))
            .clone()
    }
}

#[async_trait]
impl GraphStorage for InMemoryGraphStorage {
    async fn get(&self, project_uuid: &str, key: &SymbolNameKey) -> Result<Vec<u8>> {
        let encoded_key = encode_key(key)?;
        let bucket = self.bucket(project_uuid);
        let guard = bucket.lock();
        guard.get(&encoded_key).cloned().ok_or(ResolverError::NotFound)
    }

    async fn batch_save(&self, project_uuid: &str, items: Vec<(SymbolNameKey, Vec<u8>)>) -> Result<()> {
        let mut encoded = Vec::with_capacity(items.len());
        for (key, value) in &items {
            encoded.push((encode_key(key)?, value.clone()));
        }

        let bucket = self.bucket(project_uuid);
        let mut guard = bucket.lock();
        for (key, value) in encoded {
            guard.insert(key, value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Language;

    #[tokio::test]
    async fn get_on_empty_store_is_not_found() {
        let storage = InMemoryGraphStorage::new();
        let key = SymbolNameKey::new(Language::Go, "Helper");
        let err = storage.get("proj_abc", &key).await.unwrap_err();
        assert!(matches!(err, ResolverError::NotFound));
    }

    #[tokio::test]
    async fn batch_save_then_get_round_trips() {
        let storage = InMemoryGraphStorage::new();
        let key = SymbolNameKey::new(Language::Go, "Helper");
        let value = encode_value(&"hello".to_string()).unwrap();
        storage.batch_save("proj_abc", vec![(key.clone(), value.clone())]).await.unwrap();

        let fetched = storage.get("proj_abc", &key).await.unwrap();
        assert_eq!(fetched, value);
        let decoded: String = decode_value(&fetched).unwrap();
        assert_eq!(decoded, "hello");
    }

    #[tokio::test]
    async fn different_projects_are_isolated() {
        let storage = InMemoryGraphStorage::new();
        let key = SymbolNameKey::new(Language::Go, "Helper");
        let value = encode_value(&"hello".to_string()).unwrap();
        storage.batch_save("proj_a", vec![(key.clone(), value)]).await.unwrap();

        let err = storage.get("proj_b", &key).await.unwrap_err();
        assert!(matches!(err, ResolverError::NotFound));
    }
}
