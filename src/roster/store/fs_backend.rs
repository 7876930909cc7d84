use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Single-file JSON backend.
///
/// The whole sequence is rewritten on every save. By default the file is
/// overwritten in place; with `atomic` set, the content goes to a temp file in
/// the same directory which is then renamed over the target.
pub struct FsBackend {
    data_file: PathBuf,
    atomic: bool,
}

impl FsBackend {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            atomic: false,
        }
    }

    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_records(&self) -> Result<Vec<Record>> {
        if !self.data_file.exists() {
            debug!(path = %self.data_file.display(), "no data file yet, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.data_file).map_err(RosterError::Io)?;
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        debug!(path = %self.data_file.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save_records(&self, records: &[Record]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(records).map_err(RosterError::Serialization)?;

        if self.atomic {
            let dir = self
                .data_file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let tmp_file = dir.join(format!(".records-{}.tmp", Uuid::new_v4()));
            fs::write(&tmp_file, content).map_err(RosterError::Io)?;
            if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
                let _ = fs::remove_file(&tmp_file);
                return Err(RosterError::Io(e));
            }
        } else {
            fs::write(&self.data_file, content).map_err(RosterError::Io)?;
        }

        debug!(
            path = %self.data_file.display(),
            count = records.len(),
            atomic = self.atomic,
            "saved records"
        );
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file.clone()
    }
}
