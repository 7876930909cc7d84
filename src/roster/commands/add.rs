use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayRecord;
use crate::store::{RecordStore, StorageBackend};
use crate::validation::RecordInput;

/// Validates the form input and appends the resulting record.
/// Nothing reaches the store unless validation passes.
pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, input: &RecordInput) -> Result<CmdResult> {
    let record = input.validate()?;
    store.add(record.clone())?;

    let position = store.len();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added ({}): {} {}",
        position, record.id, record.name
    )));
    result
        .listed_records
        .push(DisplayRecord::at(position - 1, record.clone()));
    result.affected_records.push(record);
    Ok(result)
}
