//! # Storage Layer
//!
//! Records live in a single JSON file holding an array of objects, one per
//! record, in display order:
//!
//! ```text
//! <data dir>/
//! ├── records.json        # The record sequence (name configurable)
//! └── config.json         # Configuration
//! ```
//!
//! The layer is split in two:
//!
//! - [`backend::StorageBackend`]: raw I/O of the whole sequence.
//!   - [`fs_backend::FsBackend`]: the JSON file, optionally written atomically.
//!   - [`mem_backend::MemBackend`]: in-memory, for tests.
//! - [`record_store::RecordStore`]: the loaded sequence and every operation on
//!   it (add, update, delete, search, sort). It owns the records; callers only
//!   ever receive copies.
//!
//! ## Persistence Model
//!
//! The sequence is loaded once, when the store is opened, and every mutation
//! rewrites the full file before the call returns. There is no locking: a
//! second process writing the same file between load and save is silently
//! overwritten.
//!
//! ## Addressing
//!
//! Records are addressed either by zero-based position or by id. Positions go
//! stale as soon as an earlier record is removed; ids do not, so the command
//! layer resolves user input to a position immediately before each mutation.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

pub use backend::StorageBackend;
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use record_store::RecordStore;
