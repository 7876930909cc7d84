use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::{Record, RecordField};
use tracing::{debug, info, warn};

/// The in-memory record sequence and its persistence.
///
/// Construction loads eagerly, so every method operates on a loaded store.
/// Each mutation rewrites the whole sequence through the backend before
/// returning. If that write fails, the in-memory change is kept and the error
/// is returned; the on-disk copy is then stale until the next successful save.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    records: Vec<Record>,
    unique_ids: bool,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Opens the store and loads its records. A missing file is an empty store;
    /// an unreadable or malformed one is an error.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self {
            backend,
            records: Vec::new(),
            unique_ids: true,
        };
        store.load()?;
        Ok(store)
    }

    /// Whether `add` and `update` reject an id already used by another record.
    pub fn with_unique_ids(mut self, unique_ids: bool) -> Self {
        self.unique_ids = unique_ids;
        self
    }

    /// Replaces the in-memory sequence with what the backend holds.
    pub fn load(&mut self) -> Result<()> {
        self.records = self.backend.load_records()?;
        debug!(
            count = self.records.len(),
            location = %self.backend.location().display(),
            "record store loaded"
        );
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.backend.save_records(&self.records)
    }

    /// Snapshot of the full sequence, in stored order.
    pub fn records(&self) -> Vec<Record> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Result<Record> {
        self.records
            .get(position)
            .cloned()
            .ok_or_else(|| self.position_not_found(position))
    }

    /// Current position of the first record with `id`.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn add(&mut self, record: Record) -> Result<()> {
        self.check_unique(&record.id, None)?;
        info!(id = %record.id, "adding record");
        self.records.push(record);
        self.save()
    }

    pub fn update(&mut self, position: usize, record: Record) -> Result<()> {
        if position >= self.records.len() {
            return Err(self.position_not_found(position));
        }
        self.check_unique(&record.id, Some(position))?;
        info!(position, id = %record.id, "updating record");
        self.records[position] = record;
        self.save()
    }

    /// Removes and returns the record at `position`.
    pub fn delete(&mut self, position: usize) -> Result<Record> {
        if position >= self.records.len() {
            return Err(self.position_not_found(position));
        }
        let removed = self.records.remove(position);
        info!(position, id = %removed.id, "deleted record");
        self.save()?;
        Ok(removed)
    }

    /// Replaces the record currently holding `id`. Returns its position.
    pub fn update_by_id(&mut self, id: &str, record: Record) -> Result<usize> {
        let position = self.require_id(id)?;
        self.update(position, record)?;
        Ok(position)
    }

    pub fn delete_by_id(&mut self, id: &str) -> Result<Record> {
        let position = self.require_id(id)?;
        self.delete(position)
    }

    /// Records whose id, name, role or department contain `term`, ignoring
    /// case, in stored order. An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<Record> {
        self.collect_positions(self.search_positions(term))
    }

    /// Positions of the records `search` would return, ascending.
    pub fn search_positions(&self, term: &str) -> Vec<usize> {
        let term_lower = term.to_lowercase();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches(&term_lower))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Snapshot ordered by the string value of `field`. Stable, so records
    /// with equal values keep their stored order. The store is not reordered.
    pub fn sorted_by(&self, field: RecordField) -> Vec<Record> {
        self.collect_positions(self.sorted_positions(field))
    }

    /// Stored positions in the order `sorted_by` would list them.
    pub fn sorted_positions(&self, field: RecordField) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..self.records.len()).collect();
        positions.sort_by_cached_key(|&pos| field.value(&self.records[pos]));
        positions
    }

    fn collect_positions(&self, positions: Vec<usize>) -> Vec<Record> {
        positions
            .into_iter()
            .map(|pos| self.records[pos].clone())
            .collect()
    }

    fn require_id(&self, id: &str) -> Result<usize> {
        self.position_of(id).ok_or_else(|| {
            warn!(id, "no record with this id");
            RosterError::NotFound(format!("no record with id {}", id))
        })
    }

    fn check_unique(&self, id: &str, ignore: Option<usize>) -> Result<()> {
        if !self.unique_ids {
            return Ok(());
        }
        let clash = self
            .records
            .iter()
            .enumerate()
            .any(|(pos, r)| Some(pos) != ignore && r.id == id);
        if clash {
            warn!(id, "rejecting duplicate id");
            return Err(RosterError::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    fn position_not_found(&self, position: usize) -> RosterError {
        warn!(position, len = self.records.len(), "position out of range");
        RosterError::NotFound(format!(
            "position {} is out of range ({} records)",
            position,
            self.records.len()
        ))
    }
}
