//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! roster operation, whatever the UI.
//!
//! The facade dispatches to `commands::*::run`, turns user-facing strings
//! (selectors, field names) into typed values, and returns `Result<CmdResult>`.
//! It does no business logic and never touches stdout or stderr.
//!
//! `RosterApi<B: StorageBackend>` is generic over the backend: `FsBackend`
//! in production, `MemBackend` in tests.

use crate::commands;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::index::RecordSelector;
use crate::model::{Record, RecordField};
use crate::store::{RecordStore, StorageBackend};
use crate::validation::RecordInput;
use chrono::Local;
use std::path::PathBuf;
use std::str::FromStr;

pub struct RosterApi<B: StorageBackend> {
    store: RecordStore<B>,
    paths: commands::RosterPaths,
    config: RosterConfig,
}

impl<B: StorageBackend> RosterApi<B> {
    pub fn new(store: RecordStore<B>, paths: commands::RosterPaths, config: RosterConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn add_record(&mut self, input: &RecordInput) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, input)
    }

    pub fn update_record(
        &mut self,
        selector: &str,
        patch: &commands::RecordPatch,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::update::run(&mut self.store, &selector, patch)
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn view_records<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn list_records(
        &self,
        search_term: Option<String>,
        sort_by: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let sort_by = sort_by.map(parse_field).transpose()?;
        let options = ListOptions {
            search_term,
            sort_by,
        };
        commands::list::run(&self.store, &options)
    }

    pub fn search_records(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    /// Exports to `dest`, or to a timestamped file in the working directory.
    pub fn export_records(&self, dest: Option<PathBuf>) -> Result<commands::CmdResult> {
        let dest =
            dest.unwrap_or_else(|| PathBuf::from(commands::export::default_filename(Local::now())));
        commands::export::run(&self.store, &dest, self.config.escape_csv)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    /// Snapshot of the stored sequence.
    pub fn records(&self) -> Vec<Record> {
        self.store.records()
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn paths(&self) -> &commands::RosterPaths {
        &self.paths
    }
}

fn parse_selector(input: &str) -> Result<RecordSelector> {
    RecordSelector::from_str(input.trim()).map_err(RosterError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>> {
    if inputs.is_empty() {
        return Err(RosterError::Api("No record selected.".into()));
    }
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

fn parse_field(input: &str) -> Result<RecordField> {
    RecordField::from_str(input).map_err(RosterError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::ListOptions;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RecordPatch, RosterPaths};
