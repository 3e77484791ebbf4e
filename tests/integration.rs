//! End-to-end scenarios 1–6 (SPEC_FULL §8) exercising the full
//! classify → normalize → index → resolve pipeline against the in-memory
//! reference storage.

use tokio_util::sync::CancellationToken;

use xref_engine::{
    Element, FileElementTable, Import, ImportNormalizer, IndexerSettings, InMemoryGraphStorage, Language,
    ModuleDescriptor, PackageClassifier, ProjectInfo, Range, ReferenceResolver, Scope, SymbolOccurrenceIndexer,
};

fn class_table(path: &str, name: &str, range: Range, language: Language) -> FileElementTable {
    let mut t = FileElementTable::new(path, language);
    t.elements.push(Element::Class {
        name: name.into(),
        range,
        scope: Scope::File,
        super_classes: vec![],
        super_interfaces: vec![],
        relations: vec![],
    });
    t
}

fn function_table(path: &str, name: &str, range: Range, scope: Scope, language: Language) -> FileElementTable {
    let mut t = FileElementTable::new(path, language);
    t.elements.push(Element::Function { name: name.into(), range, scope, relations: vec![] });
    t
}

fn call_table(path: &str, name: &str, range: Range, language: Language) -> FileElementTable {
    let mut t = FileElementTable::new(path, language);
    t.elements.push(Element::Call { name: name.into(), range, relations: vec![] });
    t
}

#[tokio::test]
async fn go_same_module_import_resolves_at_score_50() {
    let project = ProjectInfo::new(
        "acme",
        "/repos/acme",
        ModuleDescriptor { go_modules: vec!["acme.io/app".into()], ..Default::default() },
    );
    let classifier = PackageClassifier::new();
    let normalizer = ImportNormalizer::new(&classifier);
    let storage = InMemoryGraphStorage::new();
    let cancel = CancellationToken::new();

    let helper = class_table("util/helper.go", "Helper", Range::new(1, 0, 5, 0), Language::Go);
    let caller = call_table("a.go", "Helper", Range::new(10, 0, 10, 12), Language::Go);

    let tables = vec![helper, caller];
    let mut indexer = SymbolOccurrenceIndexer::new(IndexerSettings::default());
    indexer.index_files(&project.uuid, tables.len(), &tables, &storage, &cancel).await.unwrap();

    let raw_import = Import::new("a.go", "acme.io/app/util", "acme.io/app/util");
    let normalized = normalizer.normalize_all(std::slice::from_ref(&raw_import), &Language::Go, &project);
    assert_eq!(normalized[0].name, "util");

    let resolver = ReferenceResolver::new(&storage);
    let results = resolver.resolve(&project.uuid, &Language::Go, "a.go", &normalized, "Helper", &cancel).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].occurrence.path, "util/helper.go");
    assert_eq!(results[0].score, 50);
}

#[tokio::test]
async fn python_relative_import_resolves_at_score_50() {
    let project = ProjectInfo::new("acme", "/repos/acme", ModuleDescriptor::default());
    let classifier = PackageClassifier::new();
    let normalizer = ImportNormalizer::new(&classifier);
    let storage = InMemoryGraphStorage::new();
    let cancel = CancellationToken::new();

    let def_site = function_table("pkg/utils/a.py", "f", Range::new(1, 0, 3, 0), Scope::File, Language::Python);
    let call_site = call_table("pkg/sub/mod.py", "f", Range::new(5, 0, 5, 3), Language::Python);

    let tables = vec![def_site, call_site];
    let mut indexer = SymbolOccurrenceIndexer::new(IndexerSettings::default());
    indexer.index_files(&project.uuid, tables.len(), &tables, &storage, &cancel).await.unwrap();

    let raw_import = Import::new("pkg/sub/mod.py", "..utils", "..utils");
    let normalized = normalizer.normalize_all(std::slice::from_ref(&raw_import), &Language::Python, &project);
    assert_eq!(normalized[0].source, "pkg.utils");

    let resolver = ReferenceResolver::new(&storage);
    let results =
        resolver.resolve(&project.uuid, &Language::Python, "pkg/sub/mod.py", &normalized, "f", &cancel).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 50);
}

#[tokio::test]
async fn same_file_shadowing_ranks_local_definition_first() {
    let project = ProjectInfo::new("acme", "/repos/acme", ModuleDescriptor::default());
    let storage = InMemoryGraphStorage::new();
    let cancel = CancellationToken::new();

    let local = function_table("x.ts", "foo", Range::new(1, 0, 2, 0), Scope::File, Language::TypeScript);
    let distant = function_table("y.ts", "foo", Range::new(1, 0, 2, 0), Scope::File, Language::TypeScript);
    let call_site = call_table("x.ts", "foo", Range::new(10, 0, 10, 5), Language::TypeScript);

    let tables = vec![local, distant, call_site];
    let mut indexer = SymbolOccurrenceIndexer::new(IndexerSettings::default());
    indexer.index_files(&project.uuid, tables.len(), &tables, &storage, &cancel).await.unwrap();

    let resolver = ReferenceResolver::new(&storage);
    let results = resolver.resolve(&project.uuid, &Language::TypeScript, "x.ts", &[], "foo", &cancel).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].occurrence.path, "x.ts");
    assert_eq!(results[0].score, 100);
    assert!(results[0].score > results[1].score);
}

#[tokio::test]
async fn large_repo_skips_variables_but_keeps_functions() {
    let storage = InMemoryGraphStorage::new();
    let cancel = CancellationToken::new();

    let mut table = FileElementTable::new("config.go", Language::Go);
    table.elements.push(Element::Variable {
        name: "CONFIG".into(),
        range: Range::new(1, 0, 1, 10),
        scope: Scope::Package,
        relations: vec![],
    });
    table.elements.push(Element::Function {
        name: "Init".into(),
        range: Range::new(3, 0, 6, 0),
        scope: Scope::File,
        relations: vec![],
    });

    let settings = IndexerSettings { load_from_store_threshold: 9000, skip_variable_threshold: 9000 };
    let mut indexer = SymbolOccurrenceIndexer::new(settings);
    let metrics = indexer.index_files("proj", 12_000, &[table], &storage, &cancel).await.unwrap();

    assert_eq!(metrics.total_saved_variables, 0);
    assert_eq!(metrics.total_saved_symbols, 1);

    let var_key = xref_engine::SymbolNameKey::new(Language::Go, "CONFIG");
    assert!(matches!(storage.get("proj", &var_key).await, Err(xref_engine::ResolverError::NotFound)));
}

#[tokio::test]
async fn reindexing_identical_range_stays_idempotent() {
    let storage = InMemoryGraphStorage::new();
    let cancel = CancellationToken::new();
    let tables = vec![class_table("x.ts", "A", Range::new(10, 0, 20, 0), Language::TypeScript)];

    let mut first = SymbolOccurrenceIndexer::new(IndexerSettings::default());
    first.index_files("proj", 1, &tables, &storage, &cancel).await.unwrap();

    let mut second = SymbolOccurrenceIndexer::new(IndexerSettings::default());
    second.index_files("proj", 1, &tables, &storage, &cancel).await.unwrap();

    let key = xref_engine::SymbolNameKey::new(Language::TypeScript, "A");
    let bytes = storage.get("proj", &key).await.unwrap();
    let occ: xref_engine::SymbolOccurrence = xref_engine::decode_value(&bytes).unwrap();
    assert_eq!(occ.occurrences.len(), 1);
}

#[tokio::test]
async fn similarity_fallback_prefers_shared_package_over_unrelated_directory() {
    let project = ProjectInfo::new("acme", "/repos/acme", ModuleDescriptor::default());
    let storage = InMemoryGraphStorage::new();
    let cancel = CancellationToken::new();

    let near = function_table("src/foo/baz.js", "doThing", Range::new(1, 0, 3, 0), Scope::File, Language::JavaScript);
    let far = function_table("other/far.js", "doThing", Range::new(1, 0, 3, 0), Scope::File, Language::JavaScript);
    let call_site = call_table("src/foo/bar.js", "doThing", Range::new(10, 0, 10, 9), Language::JavaScript);

    let tables = vec![near, far, call_site];
    let mut indexer = SymbolOccurrenceIndexer::new(IndexerSettings::default());
    indexer.index_files(&project.uuid, tables.len(), &tables, &storage, &cancel).await.unwrap();

    let resolver = ReferenceResolver::new(&storage);
    let results =
        resolver.resolve(&project.uuid, &Language::JavaScript, "src/foo/bar.js", &[], "doThing", &cancel).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].occurrence.path, "src/foo/baz.js");
    assert!(results[0].score > results[1].score);
}
