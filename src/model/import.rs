//! Raw import data, as produced by the external parser.
//!
//! Grounded on the teacher's `parser/imports.rs::ImportInfo`, generalized from
//! TS/JS-specific `ImportKind`/`ImportSpecifier` shapes to the single
//! language-agnostic `source`/`name` pair SPEC_FULL §3 describes — normalization
//! (canonicalizing those two fields) is [`crate::import_normalizer`]'s job, not
//! this struct's.

use serde::{Deserialize, Serialize};

/// A single import/include/require/use clause as written in source, before
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// The file that declared this import (used to resolve relative imports).
    pub path: String,
    /// Raw source string as written, e.g. `"./utils"`, `"acme.io/app/util"`,
    /// `<vector>`, `"..utils"`.
    pub source: String,
    /// Raw module/name string. For most languages this equals `source`; Go
    /// import paths and Python dotted imports may differ once normalized.
    pub name: String,
    /// The local alias this import is bound to, if any (`import foo as bar`).
    pub alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>, source: impl Into<String>, name: impl Into<String>) -> Self {
        let source = source.into();
        let name = name.into();
        Self { path: path.into(), source, name, alias: None }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}
