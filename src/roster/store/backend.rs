use crate::error::Result;
use crate::model::Record;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (ordering, lookup, mutation).
pub trait StorageBackend {
    /// Load the full record sequence.
    /// Returns an empty sequence if nothing has been stored yet.
    /// Returns Err on I/O failure or if the stored data cannot be parsed.
    fn load_records(&self) -> Result<Vec<Record>>;

    /// Replace the stored sequence with `records`, in order.
    fn save_records(&self, records: &[Record]) -> Result<()>;

    /// Where the records live. For FsBackend, the real path.
    /// For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
