use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecordSelector;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::resolve_selectors;

/// Removes every selected record. All selectors are resolved against the
/// current sequence first, then removed from the highest position down so
/// earlier removals cannot shift later targets.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let mut positions = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    if positions.is_empty() {
        result.add_message(CmdMessage::info("No records to delete."));
        return Ok(result);
    }

    positions.sort_unstable_by(|a, b| b.cmp(a));
    let mut removed = Vec::with_capacity(positions.len());
    for pos in positions {
        let record = store.delete(pos)?;
        removed.push((pos, record));
    }
    removed.reverse();

    for (pos, record) in removed {
        result.add_message(CmdMessage::success(format!(
            "Record deleted ({}): {} {}",
            pos + 1,
            record.id,
            record.name
        )));
        result.affected_records.push(record);
    }

    Ok(result)
}
