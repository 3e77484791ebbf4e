//! [`ReferenceResolver`] (SPEC_FULL §4.5): given a caller site, retrieves
//! candidate occurrences by name and ranks them against the caller's file path
//! and normalized imports.
//!
//! Grounded on the teacher's `resolver/workspace.rs` (candidate gathering then
//! scoring), generalized from Rust-module-path resolution to the
//! import-aware, language-agnostic scoring model of §4.5.

pub mod similarity;

use tokio_util::sync::CancellationToken;

use crate::error::{ResolverError, Result};
use crate::import_normalizer::ImportNormalizer;
use crate::model::{Import, Language, Occurrence, SymbolNameKey};
use crate::storage::{decode_value, GraphStorage};

use self::similarity::{basename, dice_coefficient, jaro_winkler_similarity};

/// One scored candidate definition for a reference/call site (§4.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredOccurrence {
    pub occurrence: Occurrence,
    pub score: i64,
}

pub struct ReferenceResolver<'a> {
    storage: &'a dyn GraphStorage,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(storage: &'a dyn GraphStorage) -> Self {
        Self { storage }
    }

    /// Resolves `symbol_name` referenced from `caller_file_path` (with
    /// `caller_imports` already normalized) against `(project_uuid, language)`'s
    /// occurrence index (§4.5 steps 1-4).
    ///
    /// `cancel` is checked before and after the storage call, matching
    /// [`crate::indexer::SymbolOccurrenceIndexer::index_files`]'s pattern
    /// (§5: every public entry point that performs I/O takes a
    /// `CancellationToken`).
    pub async fn resolve(
        &self,
        project_uuid: &str,
        language: &Language,
        caller_file_path: &str,
        caller_imports: &[Import],
        symbol_name: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ScoredOccurrence>> {
        if cancel.is_cancelled() {
            return Err(ResolverError::Cancellation);
        }

        let key = SymbolNameKey::new(language.clone(), symbol_name);
        let get_result = self.storage.get(project_uuid, &key).await;

        if cancel.is_cancelled() {
            return Err(ResolverError::Cancellation);
        }

        let occurrences = match get_result {
            Ok(bytes) => decode_value::<crate::model::SymbolOccurrence>(&bytes)?.occurrences,
            Err(ResolverError::NotFound) => return Ok(Vec::new()),
            Err(err) if err.is_benign() => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };

        let filtered = filter_by_imports(&occurrences, caller_file_path, caller_imports);
        let candidates = if filtered.is_empty() { &occurrences } else { &filtered };

        let mut scored: Vec<ScoredOccurrence> = candidates
            .iter()
            .map(|occ| ScoredOccurrence {
                occurrence: occ.clone(),
                score: calculate_symbol_match_score(occ, caller_file_path, caller_imports, symbol_name, symbol_name),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.occurrence.path.cmp(&b.occurrence.path))
                .then_with(|| a.occurrence.range.cmp(&b.occurrence.range))
        });

        Ok(scored)
    }
}

/// §4.5 step 2: keep only occurrences the caller's file/package/imports make
/// plausible. Returns an empty `Vec` (not an error) when nothing survives —
/// the caller falls back to the unfiltered candidate list (lenient mode).
pub fn filter_by_imports(occurrences: &[Occurrence], caller_file_path: &str, caller_imports: &[Import]) -> Vec<Occurrence> {
    occurrences
        .iter()
        .filter(|occ| {
            occ.path == caller_file_path
                || same_parent_dir(&occ.path, caller_file_path)
                || caller_imports.iter().any(|imp| ImportNormalizer::is_file_path_in_import_package(&occ.path, imp))
        })
        .cloned()
        .collect()
}

/// Parent-directory equality after normalizing both paths' separators (§4.5).
fn same_parent_dir(a: &str, b: &str) -> bool {
    parent_dir(a) == parent_dir(b)
}

fn parent_dir(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    match normalized.rsplit_once('/') {
        Some((dir, _)) => dir.to_string(),
        None => String::new(),
    }
}

/// §4.5 step 4. Rules 1-3 are exact-match bonuses; rule 4 (additive) only
/// applies when none of the first three fire.
pub fn calculate_symbol_match_score(
    occurrence: &Occurrence,
    caller_file_path: &str,
    caller_imports: &[Import],
    caller_symbol_name: &str,
    callee_symbol_name: &str,
) -> i64 {
    if occurrence.path == caller_file_path {
        return 100;
    }
    if same_parent_dir(&occurrence.path, caller_file_path) {
        return 75;
    }
    if caller_imports.iter().any(|imp| ImportNormalizer::is_file_path_in_import_package(&occurrence.path, imp)) {
        return 50;
    }

    let name_score = (15.0 * jaro_winkler_similarity(callee_symbol_name, caller_symbol_name)).round() as i64;
    let filename_score =
        (10.0 * dice_coefficient(basename(&occurrence.path), basename(caller_file_path))).round() as i64;
    let package_level = package_level(&occurrence.path, caller_file_path);

    name_score + filename_score + package_level
}

/// Count of leading path components shared between `dir(caller_file)` and
/// `dir(callee_file)`, after normalizing separators to `.` then splitting on
/// the OS separator (§4.5: "this dual-normalization is inherited behavior").
fn package_level(callee_path: &str, caller_path: &str) -> i64 {
    let callee_dir = parent_dir(callee_path).replace('/', ".");
    let caller_dir = parent_dir(caller_path).replace('/', ".");

    let callee_parts: Vec<&str> = callee_dir.split('/').filter(|s| !s.is_empty()).collect();
    let caller_parts: Vec<&str> = caller_dir.split('/').filter(|s| !s.is_empty()).collect();

    callee_parts
        .iter()
        .zip(caller_parts.iter())
        .take_while(|(a, b)| a == b)
        .count() as i64
}
