use crate::api::{RosterApi, RosterPaths};
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::store::{FsBackend, RecordStore};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the default data directory.
pub const HOME_ENV: &str = "ROSTER_HOME";

pub struct RosterContext {
    pub api: RosterApi<FsBackend>,
}

/// Picks the data directory: an explicit path wins, then `ROSTER_HOME`, then
/// the platform data dir.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Config("Could not determine data directory".into()))
}

/// Loads config from `data_dir` and opens the record store it points at.
pub fn initialize(data_dir: &Path) -> Result<RosterContext> {
    let config = RosterConfig::load(data_dir)?;
    let data_file = config.data_path(data_dir);
    debug!(data_file = %data_file.display(), atomic = config.atomic_save, "opening record store");

    let backend = FsBackend::new(data_file.clone()).with_atomic_writes(config.atomic_save);
    let store = RecordStore::open(backend)?.with_unique_ids(config.unique_ids);
    let paths = RosterPaths {
        data_dir: data_dir.to_path_buf(),
        data_file,
    };
    let api = RosterApi::new(store, paths, config);

    Ok(RosterContext { api })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let temp = TempDir::new().unwrap();
        let resolved = resolve_data_dir(Some(temp.path())).unwrap();
        assert_eq!(resolved, temp.path());
    }

    #[test]
    fn initialize_empty_dir_gives_empty_store() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path()).unwrap();
        assert!(ctx.api.records().is_empty());
        assert_eq!(ctx.api.paths().data_file, temp.path().join("records.json"));
    }

    #[test]
    fn initialize_honours_configured_data_file() {
        let temp = TempDir::new().unwrap();
        let config = RosterConfig {
            data_file: "staff.json".into(),
            ..Default::default()
        };
        config.save(temp.path()).unwrap();

        let records = vec![Record::new("AB1234", "Jane", "Engineer", "R&D")];
        fs::write(
            temp.path().join("staff.json"),
            serde_json::to_string(&records).unwrap(),
        )
        .unwrap();

        let ctx = initialize(temp.path()).unwrap();
        assert_eq!(ctx.api.records(), records);
        assert_eq!(ctx.api.paths().data_file, temp.path().join("staff.json"));
    }

    #[test]
    fn initialize_fails_on_corrupt_data() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("records.json"), "{ not json").unwrap();
        assert!(matches!(
            initialize(temp.path()),
            Err(RosterError::Serialization(_))
        ));
    }
}
