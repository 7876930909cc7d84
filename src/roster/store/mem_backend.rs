use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::Record;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since roster is single-threaded,
/// which lets `StorageBackend` keep `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    records: RefCell<Vec<Record>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `records`, as if a file existed.
    pub fn with_records(records: Vec<Record>) -> Self {
        let backend = Self::default();
        *backend.records.borrow_mut() = records;
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation, standing in for a corrupt file.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// What was last persisted.
    pub fn stored(&self) -> Vec<Record> {
        self.records.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StorageBackend for MemBackend {
    fn load_records(&self) -> Result<Vec<Record>> {
        if self.simulate_read_error.get() {
            return Err(RosterError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "Simulated read error",
            )));
        }
        Ok(self.records.borrow().clone())
    }

    fn save_records(&self, records: &[Record]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RosterError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Simulated write error",
            )));
        }
        *self.records.borrow_mut() = records.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://records.json")
    }
}
