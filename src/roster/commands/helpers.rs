use crate::error::{Result, RosterError};
use crate::index::{DisplayRecord, RecordSelector};
use crate::store::{RecordStore, StorageBackend};

/// Maps a selector to the record's current zero-based position.
pub fn resolve_selector<B: StorageBackend>(
    store: &RecordStore<B>,
    selector: &RecordSelector,
) -> Result<usize> {
    match selector {
        RecordSelector::Id(id) => store
            .position_of(id)
            .ok_or_else(|| RosterError::NotFound(format!("no record with id {}", id))),
        RecordSelector::Position(n) if *n >= 1 && *n <= store.len() => Ok(n - 1),
        RecordSelector::Position(n) => Err(RosterError::NotFound(format!(
            "position {} is out of range ({} records)",
            n,
            store.len()
        ))),
    }
}

/// Resolves every selector up front so a bad one fails before anything runs.
/// Duplicates (the same record named twice) collapse to one entry.
pub fn resolve_selectors<B: StorageBackend>(
    store: &RecordStore<B>,
    selectors: &[RecordSelector],
) -> Result<Vec<usize>> {
    let mut positions = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let pos = resolve_selector(store, selector)?;
        if !positions.contains(&pos) {
            positions.push(pos);
        }
    }
    Ok(positions)
}

pub fn records_by_selectors<B: StorageBackend>(
    store: &RecordStore<B>,
    selectors: &[RecordSelector],
) -> Result<Vec<DisplayRecord>> {
    resolve_selectors(store, selectors)?
        .into_iter()
        .map(|pos| Ok(DisplayRecord::at(pos, store.get(pos)?)))
        .collect()
}
