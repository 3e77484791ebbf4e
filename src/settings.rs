//! Environment-sourced indexer thresholds (SPEC_FULL §6 "Environment variables").
//!
//! Load pattern grounded on the teacher's `config::CodeGraphConfig::load` —
//! missing or malformed input falls back to defaults rather than erroring, just
//! sourced from environment variables instead of a TOML file since this crate's
//! ambient config surface is the indexer's own thresholds, not a project file.

use tracing::debug;

const DEFAULT_THRESHOLD: usize = 9000;

/// Thresholds controlling the [`crate::indexer::SymbolOccurrenceIndexer`]'s
/// load and variable-skip policies (§4.3).
#[derive(Debug, Clone, Copy)]
pub struct IndexerSettings {
    pub load_from_store_threshold: usize,
    pub skip_variable_threshold: usize,
}

impl Default for IndexerSettings {
    fn default() -> Self {
        Self {
            load_from_store_threshold: DEFAULT_THRESHOLD,
            skip_variable_threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl IndexerSettings {
    /// Reads `LOAD_FROM_STORE_THRESHOLD` and `SKIP_VARIABLE_THRESHOLD` from the
    /// environment. Invalid (non-numeric, non-positive) values fall back silently
    /// to the default, logged at `debug` (§6).
    pub fn from_env() -> Self {
        Self {
            load_from_store_threshold: read_threshold("LOAD_FROM_STORE_THRESHOLD"),
            skip_variable_threshold: read_threshold("SKIP_VARIABLE_THRESHOLD"),
        }
    }
}

fn read_threshold(var: &str) -> usize {
    match std::env::var(var) {
        Ok(raw) => match raw.parse::<usize>() {
            Ok(value) if value > 0 => value,
            _ => {
                debug!(var, raw, "invalid threshold value, falling back to default");
                DEFAULT_THRESHOLD
            }
        },
        Err(_) => DEFAULT_THRESHOLD,
    }
}
