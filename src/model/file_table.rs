//! The per-file data contract produced by the external parser (SPEC_FULL §3).

use serde::{Deserialize, Serialize};

use super::{Element, Import, Language};

/// Everything the parser extracted from one source file: its imports and its
/// declared/referenced elements. One per file, ephemeral to a single indexing
/// task — occurrences outlive it via persistent storage (§3 "Lifecycle").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileElementTable {
    pub path: String,
    pub language: Language,
    pub imports: Vec<Import>,
    pub elements: Vec<Element>,
}

impl FileElementTable {
    pub fn new(path: impl Into<String>, language: Language) -> Self {
        Self { path: path.into(), language, imports: Vec::new(), elements: Vec::new() }
    }
}
