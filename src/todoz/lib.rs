//! # Todoz Architecture
//!
//! Todoz is a small todo list whose core is a **UI-agnostic list service**. The
//! binary is one client of that service; it never touches storage itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the list, reports errors       │
//! │  - Re-renders from `get_all()` after every mutation         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Layer (service.rs)                                 │
//! │  - Owns the collection, sole writer to storage              │
//! │  - Persists every change before adopting it                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure functions: current list in, next list out           │
//! │  - Id generation and invariant checks                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: one blob per key                   │
//! │  - FileBackend (production), MemBackend (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The List Rules
//!
//! - Ids are positive, unique, and never reused while a larger id exists:
//!   a new id is always one past the current maximum.
//! - At most one todo may have an empty title. It is the draft slot the next
//!   `edit` fills in, and `add` refuses to create another until it is.
//! - Sorting is case-insensitive, stable, and drops the empty draft.
//! - Deleting an unknown id is a no-op.
//!
//! Every rejected operation returns a typed [`error::TodozError`] and leaves
//! both memory and storage untouched.
//!
//! ## Module Overview
//!
//! - [`service`]: The list service, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Todo`)
//! - [`config`]: Configuration management
//! - [`logging`]: `tracing` subscriber setup for the binary
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
