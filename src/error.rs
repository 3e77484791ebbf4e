//! The error taxonomy for the resolution engine (SPEC_FULL §7).
//!
//! Shape grounded on `other_examples/4f362adf_..._types.rs.rs`'s `PipelineError`
//! (a `thiserror` enum with `#[from]` wiring for the lower-level error it wraps).

use thiserror::Error;

/// Every way a call into this crate can fail.
///
/// `NotFound` is deliberately not `std::error::Error`-terminal in the way callers
/// treat it: the indexer and resolver both treat it as an empty result, never an
/// abort (§7 propagation policy). It is still a variant here, rather than an
/// `Option`, so `GraphStorage::get` has one return type to implement against.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// A `GraphStorage::get`/`batch_save` call failed transiently (I/O error,
    /// timeout, connection reset, ...). Logged at `debug`; the resolver treats a
    /// failed `get` as "no candidates" and continues.
    #[error("transient storage error for project {project_uuid}: {source}")]
    TransientStorage {
        project_uuid: String,
        #[source]
        source: anyhow::Error,
    },

    /// The requested key does not exist. Not a failure from the caller's
    /// perspective — treated as an empty result.
    #[error("key not found")]
    NotFound,

    /// A stored value failed to deserialize. Logged at `warn`; the caller
    /// proceeds as if the key were absent.
    #[error("failed to decode stored value: {0}")]
    DecodeError(String),

    /// Caller-supplied input was structurally invalid (empty project, missing
    /// required fields). Returned synchronously; never produces a partial write.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The operation was cancelled via the caller's `CancellationToken`.
    /// Propagated unchanged; never retried.
    #[error("operation cancelled")]
    Cancellation,
}

impl ResolverError {
    /// `true` for the two kinds the indexer/resolver downgrade to "empty result"
    /// rather than aborting (§7 propagation policy).
    pub fn is_benign(&self) -> bool {
        matches!(self, ResolverError::NotFound | ResolverError::DecodeError(_))
    }
}

pub type Result<T> = std::result::Result<T, ResolverError>;
