//! Project-level metadata, produced by external module resolution and consumed
//! read-only by the core (SPEC_FULL §3, component `ModuleDescriptor`).

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Per-language project roots used by the [`crate::classifier::PackageClassifier`]
/// to recognize project-scoped imports. This is exactly the "ModuleDescriptor"
/// component from SPEC_FULL §2 item 2 — its fields are produced by module
/// resolution external to this crate (reading `go.mod`, `pyproject.toml`,
/// `package.json`, include-path flags, ...) and never mutated here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub go_modules: Vec<String>,
    pub java_package_prefix: Vec<String>,
    pub python_packages: Vec<String>,
    pub cpp_includes: Vec<String>,
    pub js_packages: Vec<String>,
}

impl ModuleDescriptor {
    /// `go_modules` sorted longest-first, so a more specific module path
    /// (`acme.io/app/v2`) is tried before a shorter one it would otherwise be
    /// shadowed by (`acme.io/app`) — SPEC_FULL §9 "Go-module stripping order".
    pub fn go_modules_longest_first(&self) -> Vec<&str> {
        let mut modules: Vec<&str> = self.go_modules.iter().map(String::as_str).collect();
        modules.sort_by_key(|m| std::cmp::Reverse(m.len()));
        modules
    }
}

/// Which SHA-256 hex encoding a [`ProjectInfo`] uuid uses (§6 "UUID format").
/// The two variants must never be mixed within one storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidVariant {
    /// `<name>_<32-hex>` — first 16 bytes of the digest. Default for new deployments.
    Short,
    /// `<name>_<64-hex>` — the full digest.
    Long,
}

/// Workspace/project identity and module metadata (SPEC_FULL §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub name: String,
    pub path: String,
    pub uuid: String,
    pub modules: ModuleDescriptor,
}

impl ProjectInfo {
    /// Builds a `ProjectInfo` with the default (short, 32-hex) uuid variant.
    pub fn new(name: impl Into<String>, path: impl Into<String>, modules: ModuleDescriptor) -> Self {
        Self::with_uuid_variant(name, path, modules, UuidVariant::Short)
    }

    /// Builds a `ProjectInfo` with an explicit uuid variant. See §6: the long
    /// variant is permitted for new deployments but must not be mixed with the
    /// short variant within one storage.
    pub fn with_uuid_variant(
        name: impl Into<String>,
        path: impl Into<String>,
        modules: ModuleDescriptor,
        variant: UuidVariant,
    ) -> Self {
        let name = name.into();
        let path = path.into();
        let uuid = compute_uuid(&name, &path, variant);
        Self { name, path, uuid, modules }
    }
}

/// `uuid = name + "_" + hex(sha256(path))[..len]`, `len` = 32 for [`UuidVariant::Short`]
/// (first 16 bytes), 64 for [`UuidVariant::Long`] (full digest). Stable across runs
/// for identical `(name, path)` (§3 invariant).
pub fn compute_uuid(name: &str, path: &str, variant: UuidVariant) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    let digest = hasher.finalize();
    let full_hex = hex::encode(digest);
    let hex_part = match variant {
        UuidVariant::Short => &full_hex[..32],
        UuidVariant::Long => full_hex.as_str(),
    };
    format!("{name}_{hex_part}")
}
