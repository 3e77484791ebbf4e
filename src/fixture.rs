//! JSON fixture loading for the demo binary (SPEC_FULL "Ambient stack").
//!
//! Grounded on the teacher's `cache/envelope.rs` (`save_cache`/`load_cache`
//! read-from-disk-then-deserialize shape, `tempfile`-backed round-trip tests),
//! adapted from bincode-encoded cache envelopes to hand-editable JSON fixtures.

use std::path::Path;

use crate::model::{FileElementTable, ProjectInfo};

/// Reads a `ProjectInfo` from a JSON file on disk.
pub fn load_project_info(path: impl AsRef<Path>) -> anyhow::Result<ProjectInfo> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let project = serde_json::from_str(&raw)?;
    Ok(project)
}

/// Reads a `Vec<FileElementTable>` from a JSON file on disk.
pub fn load_file_tables(path: impl AsRef<Path>) -> anyhow::Result<Vec<FileElementTable>> {
    let raw = std::fs::read_to_string(path.as_ref())?;
    let tables = serde_json::from_str(&raw)?;
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModuleDescriptor;

    #[test]
    fn roundtrips_project_info_through_json() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let path = tmp_dir.path().join("project.json");

        let project = ProjectInfo::new(
            "acme",
            "/repos/acme",
            ModuleDescriptor { go_modules: vec!["acme.io/app".into()], ..Default::default() },
        );
        std::fs::write(&path, serde_json::to_string_pretty(&project).unwrap()).unwrap();

        let loaded = load_project_info(&path).unwrap();
        assert_eq!(loaded.name, project.name);
        assert_eq!(loaded.uuid, project.uuid);
        assert_eq!(loaded.modules.go_modules, project.modules.go_modules);
    }

    #[test]
    fn roundtrips_file_tables_through_json() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let path = tmp_dir.path().join("files.json");

        let tables = vec![FileElementTable::new("a.go", crate::model::Language::Go)];
        std::fs::write(&path, serde_json::to_string_pretty(&tables).unwrap()).unwrap();

        let loaded = load_file_tables(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].path, "a.go");
    }

    #[test]
    fn missing_file_returns_err() {
        let tmp_dir = tempfile::tempdir().unwrap();
        let missing = tmp_dir.path().join("does-not-exist.json");
        assert!(load_project_info(&missing).is_err());
    }
}
