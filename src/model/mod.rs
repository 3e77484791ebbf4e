//! The data contract this engine consumes and produces.
//!
//! Everything in this module is plain data: it is produced by an external parser
//! (`Element`, `Import`, `FileElementTable`) or external module resolution
//! (`ProjectInfo`), and consumed read-only by the resolution engine in the sibling
//! modules. Nothing here does I/O.

pub mod element;
pub mod file_table;
pub mod import;
pub mod occurrence;
pub mod project;

pub use element::{is_declaration, Element, ElementKind, ElementLike, Range, Relation, RelationType, Scope};
pub use file_table::FileElementTable;
pub use import::Import;
pub use occurrence::{ElementPathKey, Occurrence, SymbolNameKey, SymbolOccurrence};
pub use project::{ModuleDescriptor, ProjectInfo, UuidVariant};

/// The language tag carried on every file, import, and occurrence.
///
/// `Other` exists so a parser front-end can emit a language this engine has no
/// classifier rules for yet: such files are still indexed and resolved, they just
/// never get better than [`crate::classifier::Classification::Unknown`] import
/// classification (§4.1 has no rule table for it).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Language {
    Go,
    Java,
    Python,
    C,
    Cpp,
    JavaScript,
    TypeScript,
    Other(String),
}

impl Language {
    /// Short lowercase tag, stable across runs — used inside storage keys.
    pub fn tag(&self) -> &str {
        match self {
            Language::Go => "go",
            Language::Java => "java",
            Language::Python => "python",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Other(s) => s.as_str(),
        }
    }
}
