//! [`ImportNormalizer`] (SPEC_FULL §4.2): turns raw, per-language imports into a
//! canonical, dot-separated, project-scoped form, dropping anything the
//! [`crate::classifier::PackageClassifier`] recognizes as system or third-party.
//!
//! Path-resolution shape grounded on the teacher's `resolver/workspace.rs`
//! relative-path-joining logic, generalized from Rust module paths to the
//! language-agnostic dotted form SPEC_FULL §4.2 specifies.

use crate::classifier::{Classification, PackageClassifier};
use crate::model::{Import, Language, ProjectInfo};

pub struct ImportNormalizer<'a> {
    classifier: &'a PackageClassifier,
}

impl<'a> ImportNormalizer<'a> {
    pub fn new(classifier: &'a PackageClassifier) -> Self {
        Self { classifier }
    }

    /// Normalizes `imports`, dropping any classified `System`/`ThirdParty` and
    /// returning only project-scoped imports in canonical form (§4.2 steps 1-4).
    pub fn normalize_all(&self, imports: &[Import], language: &Language, project: &ProjectInfo) -> Vec<Import> {
        imports
            .iter()
            .filter_map(|imp| self.normalize_one(imp, language, project))
            .collect()
    }

    fn normalize_one(&self, imp: &Import, language: &Language, project: &ProjectInfo) -> Option<Import> {
        match self.classifier.classify(language, &imp.name, project) {
            Classification::System | Classification::ThirdParty => return None,
            Classification::Project | Classification::Unknown => {}
        }

        let mut source = imp.source.clone();
        let mut name = imp.name.clone();

        if *language == Language::Go {
            for module in project.modules.go_modules_longest_first() {
                let prefix = format!("{module}/");
                if let Some(rest) = source.strip_prefix(&prefix) {
                    source = rest.to_string();
                    name = name.strip_prefix(&prefix).unwrap_or(&name).to_string();
                    break;
                }
            }
        }

        if source.starts_with('.') {
            source = resolve_relative(&imp.path, &source);
        }

        let source = canonicalize(&source);
        let name = canonicalize(&name);

        Some(Import { path: imp.path.clone(), source, name, alias: imp.alias.clone() })
    }

    /// §4.2 membership test: substring match on dot-normalized paths, used only
    /// as a candidate filter feeding the resolver's scorer (§4.5), never as a
    /// hard predicate — see SPEC_FULL §9 "Lenient substring matching".
    pub fn is_file_path_in_import_package(file_path: &str, imp: &Import) -> bool {
        let normalized = canonicalize(file_path);
        normalized.contains(&imp.name) || normalized.contains(&imp.source)
    }
}

/// Resolves a `.`/`..`-prefixed `src` relative to the directory of
/// `declaring_file`. Handles both slash-delimited relative paths (`./utils`,
/// `../utils`, Go/JS style) and Python's dot-run syntax (`.utils`, `..utils`,
/// no slashes) — in the latter, `declaring_file`'s own directory already *is*
/// the first package level, so a single leading dot means "stay here" (0
/// levels up) and each additional dot means one more level up.
fn resolve_relative(declaring_file: &str, src: &str) -> String {
    let (up_levels, cleaned) = if src.contains('/') {
        let up_levels = src.matches("../").count();
        let cleaned = src.replace("../", "").trim_start_matches("./").to_string();
        (up_levels, cleaned)
    } else {
        let dot_count = src.chars().take_while(|c| *c == '.').count();
        let cleaned = src[dot_count..].to_string();
        (dot_count.saturating_sub(1), cleaned)
    };

    let mut dir_components: Vec<&str> = declaring_file
        .rsplit_once(['/', '\\'])
        .map(|(dir, _)| dir)
        .unwrap_or("")
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .collect();

    for _ in 0..up_levels {
        dir_components.pop();
    }

    if cleaned.is_empty() {
        dir_components.join("/")
    } else if dir_components.is_empty() {
        cleaned
    } else {
        format!("{}/{}", dir_components.join("/"), cleaned)
    }
}

/// Replaces OS path separators with `.`, drops `*`, and collapses repeated
/// separators / resolves `.`/`..` segments (§4.2 step 4).
fn canonicalize(raw: &str) -> String {
    let unified = raw.replace('\\', "/").replace('*', "");

    let mut segments: Vec<&str> = Vec::new();
    for seg in unified.split('/') {
        match seg {
            "" | "." => continue,
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join(".")
}
