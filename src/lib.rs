//! Cross-file, cross-language symbol resolution engine.
//!
//! Pipeline (SPEC_FULL §2): `FileElementTable[]` → [`import_normalizer`] →
//! [`indexer`] → persistent storage (via [`storage::GraphStorage`]). On query:
//! `(file, reference)` → [`resolver`] → scored candidates → [`relation_binder`].
//!
//! Every public entry point that performs I/O takes a
//! `tokio_util::sync::CancellationToken` (§5) and returns [`error::ResolverError`]
//! on failure.

pub mod classifier;
pub mod error;
pub mod fixture;
pub mod import_normalizer;
pub mod indexer;
pub mod model;
pub mod relation_binder;
pub mod resolver;
pub mod settings;
pub mod storage;

pub use classifier::{Classification, PackageClassifier};
pub use error::{ResolverError, Result};
pub use fixture::{load_file_tables, load_project_info};
pub use import_normalizer::ImportNormalizer;
pub use indexer::{IndexTaskMetrics, SymbolOccurrenceIndexer};
pub use model::{
    Element, ElementKind, ElementLike, FileElementTable, Import, Language, ModuleDescriptor, Occurrence, ProjectInfo,
    Range, Relation, RelationType, Scope, SymbolNameKey, SymbolOccurrence,
};
pub use relation_binder::bind;
pub use resolver::{calculate_symbol_match_score, filter_by_imports, ReferenceResolver, ScoredOccurrence};
pub use settings::IndexerSettings;
pub use storage::{decode_value, encode_value, GraphStorage, InMemoryGraphStorage};
