//! A thin, fixture-driven CLI demonstrating the indexing → resolution pipeline
//! end to end against the in-memory reference storage.
//!
//! Style grounded on the teacher's `main.rs`/`output.rs` (clap subcommands,
//! a human-readable summary printed to stdout, `tracing` for diagnostics
//! rather than print-debugging). Fixtures are loaded from disk as JSON via
//! [`xref_engine::load_project_info`]/[`xref_engine::load_file_tables`], not
//! built in Rust, so the demo exercises the same data contract a real caller
//! would hand the engine.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use xref_engine::{
    bind, load_file_tables, load_project_info, Element, FileElementTable, ImportNormalizer, IndexerSettings,
    InMemoryGraphStorage, PackageClassifier, Range, ReferenceResolver, RelationType, Scope, SymbolOccurrenceIndexer,
};

#[derive(Parser)]
#[command(name = "xref-demo", about = "Demonstrates cross-file symbol resolution against JSON fixtures")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Index a project's fixture files, then resolve a reference against them.
    Resolve {
        /// JSON file holding a single `ProjectInfo`.
        #[arg(long, default_value = "fixtures/project.json")]
        project: PathBuf,

        /// JSON file holding a `FileElementTable[]`.
        #[arg(long, default_value = "fixtures/files.json")]
        files: PathBuf,

        /// Path of the file the reference is made from.
        #[arg(long, default_value = "a.go")]
        caller_file: String,

        /// The symbol name to resolve.
        #[arg(default_value = "Helper")]
        symbol: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Resolve { project, files, caller_file, symbol } => {
            run_resolve(&project, &files, &caller_file, &symbol).await?
        }
    }

    Ok(())
}

async fn run_resolve(project_path: &PathBuf, files_path: &PathBuf, caller_file: &str, symbol: &str) -> anyhow::Result<()> {
    let project = load_project_info(project_path)?;
    info!(uuid = %project.uuid, "loaded project identity");

    let tables = load_file_tables(files_path)?;
    info!(file_count = tables.len(), "loaded fixture tables");

    let caller_table: FileElementTable = tables
        .iter()
        .find(|t| t.path == caller_file)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("no fixture file table for caller path `{caller_file}`"))?;
    let language = caller_table.language.clone();

    let classifier = PackageClassifier::new();
    let normalizer = ImportNormalizer::new(&classifier);

    let cancel = CancellationToken::new();
    let storage = InMemoryGraphStorage::new();
    let settings = IndexerSettings::from_env();
    let mut indexer = SymbolOccurrenceIndexer::new(settings);

    let metrics = indexer
        .index_files(&project.uuid, tables.len(), &tables, &storage, &cancel)
        .await?;
    info!(?metrics, "indexed fixture");

    let normalized_imports = normalizer.normalize_all(&caller_table.imports, &language, &project);
    let resolver = ReferenceResolver::new(&storage);
    let candidates = resolver
        .resolve(&project.uuid, &language, caller_file, &normalized_imports, symbol, &cancel)
        .await?;

    println!("Resolved {} candidate(s) for `{symbol}`:", candidates.len());
    for candidate in &candidates {
        println!("  {} @ {:?}  score={}", candidate.occurrence.path, candidate.occurrence.range, candidate.score);
    }

    if let Some(best) = candidates.first() {
        if let Some(mut call_site) = find_call_element(&caller_table, symbol) {
            let mut def_site = helper_function(symbol);
            bind(
                &mut call_site,
                caller_file,
                &mut def_site,
                &best.occurrence.path,
                RelationType::Reference,
                RelationType::Definition,
            );
            println!("Bound call site to {}", best.occurrence.path);
        }
    }

    Ok(())
}

fn find_call_element(table: &FileElementTable, symbol: &str) -> Option<Element> {
    table.elements.iter().find(|e| matches!(e, Element::Call { name, .. } if name == symbol)).cloned()
}

fn helper_function(name: &str) -> Element {
    Element::Function { name: name.to_string(), range: Range::new(1, 0, 5, 0), scope: Scope::File, relations: vec![] }
}
