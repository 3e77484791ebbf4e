//! [`SymbolOccurrenceIndexer`] (SPEC_FULL §4.3): streams declarations out of
//! per-file element tables into a bounded in-memory LRU-cached index, then
//! flushes to persistent storage.
//!
//! Cache-then-storage load pattern grounded on the teacher's
//! `cache/envelope.rs` save/load split, generalized from one whole-graph
//! envelope to a per-symbol-name cache entry.

use std::num::NonZeroUsize;

use lru::LruCache;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{ResolverError, Result};
use crate::model::{Element, ElementLike, FileElementTable, Occurrence, SymbolNameKey, SymbolOccurrence};
use crate::settings::IndexerSettings;
use crate::storage::{decode_value, encode_value, GraphStorage};

/// Default bound for the in-task occurrence cache when a caller has no
/// opinion. Callers processing very large monorepos should size this to their
/// available memory rather than rely on the default.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Counters returned per indexing task (§4.3 "Metrics returned").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexTaskMetrics {
    pub total_symbols: u64,
    pub total_saved_symbols: u64,
    pub total_variables: u64,
    pub total_saved_variables: u64,
}

/// Task-local, not shared across indexing tasks (§5 "Shared resources").
pub struct SymbolOccurrenceIndexer {
    settings: IndexerSettings,
    cache: LruCache<String, SymbolOccurrence>,
}

impl SymbolOccurrenceIndexer {
    pub fn new(settings: IndexerSettings) -> Self {
        Self::with_capacity(settings, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(settings: IndexerSettings, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self { settings, cache: LruCache::new(capacity) }
    }

    /// Indexes every declaration across `tables`, then flushes the resulting
    /// `SymbolOccurrence`s to `storage` in one `batch_save` (§4.3).
    pub async fn index_files(
        &mut self,
        project_uuid: &str,
        total_files: usize,
        tables: &[FileElementTable],
        storage: &dyn GraphStorage,
        cancel: &CancellationToken,
    ) -> Result<IndexTaskMetrics> {
        if project_uuid.is_empty() {
            return Err(ResolverError::InvalidInput("project_uuid must not be empty".into()));
        }

        let mut metrics = IndexTaskMetrics::default();
        let mut touched: Vec<String> = Vec::new();

        for table in tables {
            if cancel.is_cancelled() {
                return Err(ResolverError::Cancellation);
            }

            for element in &table.elements {
                if !crate::model::is_declaration(element.kind()) {
                    continue;
                }

                let is_variable = matches!(element, Element::Variable { .. });
                if is_variable {
                    metrics.total_variables += 1;
                }
                metrics.total_symbols += 1;

                if is_variable && self.should_skip_variable(total_files, element) {
                    continue;
                }

                self.load_or_seed(project_uuid, &table.language, element.name(), storage, total_files)
                    .await?;

                let occurrence = self
                    .cache
                    .get_mut(element.name())
                    .expect("just loaded or seeded by load_or_seed");
                occurrence.upsert(Occurrence {
                    path: table.path.clone(),
                    range: element.range(),
                    element_type: element.kind(),
                });
                if !touched.contains(&element.name().to_string()) {
                    touched.push(element.name().to_string());
                }

                if is_variable {
                    metrics.total_saved_variables += 1;
                } else {
                    metrics.total_saved_symbols += 1;
                }
            }
        }

        if cancel.is_cancelled() {
            return Err(ResolverError::Cancellation);
        }

        let mut batch = Vec::with_capacity(touched.len());
        for name in &touched {
            if let Some(occ) = self.cache.peek(name) {
                let key = SymbolNameKey::new(occ.language.clone(), occ.name.clone());
                let bytes = encode_value(occ)?;
                batch.push((key, bytes));
            }
        }

        if !batch.is_empty() {
            storage.batch_save(project_uuid, batch).await?;
        }

        Ok(metrics)
    }

    /// Variable-skip policy (§4.3): skip when the repo is large or the variable
    /// is not file/package/project scoped.
    fn should_skip_variable(&self, total_files: usize, element: &Element) -> bool {
        if total_files > self.settings.skip_variable_threshold {
            return true;
        }
        use crate::model::Scope;
        !matches!(element.scope(), Scope::File | Scope::Package | Scope::Project)
    }

    /// Load policy (§4.3 steps 1-3): reuse a cache hit, else consult storage
    /// when under the load threshold, else start fresh.
    async fn load_or_seed(
        &mut self,
        project_uuid: &str,
        language: &crate::model::Language,
        name: &str,
        storage: &dyn GraphStorage,
        total_files: usize,
    ) -> Result<()> {
        if self.cache.contains(name) {
            return Ok(());
        }

        if total_files <= self.settings.load_from_store_threshold {
            let key = SymbolNameKey::new(language.clone(), name);
            match storage.get(project_uuid, &key).await {
                Ok(bytes) => match decode_value::<SymbolOccurrence>(&bytes) {
                    Ok(existing) => {
                        self.cache.put(name.to_string(), existing);
                        return Ok(());
                    }
                    Err(err) => {
                        warn!(name, %err, "failed to decode stored occurrence, starting fresh");
                    }
                },
                Err(ResolverError::NotFound) => {}
                Err(err) if err.is_benign() => {
                    debug!(name, %err, "benign storage error, starting fresh");
                }
                Err(err) => {
                    debug!(name, %err, "transient storage error, starting fresh");
                }
            }
        }

        self.cache.put(name.to_string(), SymbolOccurrence::new(name, language.clone()));
        Ok(())
    }
}
