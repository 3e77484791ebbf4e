//! The persisted unit and its storage keys (SPEC_FULL §3, §6).

use serde::{Deserialize, Serialize};

use super::{ElementKind, Language, Range};

/// One sighting of a named symbol at a `(path, range)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub path: String,
    pub range: Range,
    pub element_type: ElementKind,
}

/// The persisted unit: every known occurrence of one `(language, name)` pair.
/// Invariant: `(path, range)` is unique within `occurrences` (§3, §8 invariant 2).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolOccurrence {
    pub name: String,
    pub language: Language,
    pub occurrences: Vec<Occurrence>,
}

impl SymbolOccurrence {
    pub fn new(name: impl Into<String>, language: Language) -> Self {
        Self { name: name.into(), language, occurrences: Vec::new() }
    }

    /// Appends `occ`, first removing any existing entry with the same
    /// `(path, range)` — this is what makes re-indexing a file idempotent
    /// (§4.3 load policy step 2, §8 scenario 5).
    pub fn upsert(&mut self, occ: Occurrence) {
        self.occurrences.retain(|o| !(o.path == occ.path && o.range == occ.range));
        self.occurrences.push(occ);
    }
}

/// Storage key grouping occurrences by `(language, name)`. Scoped per project
/// uuid at the storage layer (the uuid is a parameter to `GraphStorage`, not part
/// of this key, since one store serves many projects).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolNameKey {
    pub language: Language,
    pub name: String,
}

impl SymbolNameKey {
    pub fn new(language: Language, name: impl Into<String>) -> Self {
        Self { language, name: name.into() }
    }
}

/// Storage key addressing "everything declared in this file" — used by an
/// embedding application to sweep stale occurrences on file deletion during an
/// incremental run (the sweep itself is workspace-traversal territory, out of
/// scope here; this crate only defines the key shape).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementPathKey {
    pub language: Language,
    pub path: String,
}

impl ElementPathKey {
    pub fn new(language: Language, path: impl Into<String>) -> Self {
        Self { language, path: path.into() }
    }
}
