//! # Roster Architecture
//!
//! Roster is a **UI-agnostic personnel record library** with a command-line
//! client on top. Records live in a single JSON file; the library validates
//! them, keeps them in stored order, and exports them as CSV.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Parses selectors (AB1234 or 1-based positions)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, mutation, listing, export                    │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore over a StorageBackend                        │
//! │  - FsBackend (JSON file), MemBackend (testing)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions and ids
//!
//! Records have no surrogate key. The CLI addresses them either by their id
//! field or by their 1-based position in stored order. Filtering and sorting
//! only change what is shown; the positions printed next to each row always
//! refer to stored order, so they can be passed straight back to `view`,
//! `update` or `delete`. See `index.rs`.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** and **store**: unit tests against `MemBackend`.
//! 2. **API**: dispatch and selector parsing.
//! 3. **CLI**: rendering unit tests, plus end-to-end runs in `tests/cli.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record`, `Status`, `RecordField`
//! - [`validation`]: Field rules and `RecordInput`
//! - [`index`]: Selectors and display positions
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;
