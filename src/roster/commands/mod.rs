use crate::config::RosterConfig;
use crate::index::DisplayRecord;
use crate::model::Record;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub data_dir: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<DisplayRecord>,
    pub written_paths: Vec<PathBuf>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_written_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.written_paths = paths;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// A partial edit: `None` keeps the record's current value.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub hire_date: Option<String>,
    pub status: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        [
            &self.id,
            &self.name,
            &self.role,
            &self.department,
            &self.email,
            &self.phone,
            &self.hire_date,
            &self.status,
        ]
        .iter()
        .all(|field| field.is_none())
    }
}
