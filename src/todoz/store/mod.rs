//! # Storage Layer
//!
//! The whole todo collection is persisted as a single serialized blob under one
//! well-known key, the way a browser's local storage would hold it. The
//! [`StorageBackend`] trait is that key-value boundary; it knows nothing about
//! todos. [`load_todos`] and [`save_todos`] are the codec on top of it.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage
//!   - One file per key: `{data_dir}/{key}.json`
//!   - Writes go to a temp file first and are renamed into place
//!
//! - [`memory::MemBackend`]: in-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/todoz/
//! ├── TODOS.json      # [{"id":1,"title":"buy milk"}, ...]
//! └── config.json     # TodozConfig
//! ```
//!
//! An absent or unparseable blob loads as an empty collection. Only real I/O
//! failures are reported as errors.

use crate::error::{Result, TodozError};
use crate::model::Todo;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

/// The key the collection is stored under unless configured otherwise.
pub const TODOS_KEY: &str = "TODOS";

/// Abstract key-value interface for raw storage I/O.
///
/// Calls are synchronous: once `write` returns `Ok`, the value is durable as
/// far as the backend can tell.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when nothing has been stored yet.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Keys become file names, so they may not be empty, hidden, or contain a
/// path separator.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
        return Err(TodozError::Store(format!("Invalid storage key: {:?}", key)));
    }
    Ok(())
}

/// Load the collection stored under `key`.
pub fn load_todos<B: StorageBackend + ?Sized>(backend: &B, key: &str) -> Result<Vec<Todo>> {
    let raw = match backend.read(key)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => {
            debug!(key, "no stored todos");
            return Ok(Vec::new());
        }
    };

    match serde_json::from_str::<Vec<Todo>>(&raw) {
        Ok(todos) => {
            debug!(key, count = todos.len(), "loaded todos");
            Ok(todos)
        }
        Err(err) => {
            warn!(key, error = %err, "stored todos are unreadable, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize `todos` and store them under `key`.
pub fn save_todos<B: StorageBackend + ?Sized>(
    backend: &mut B,
    key: &str,
    todos: &[Todo],
) -> Result<()> {
    let raw = serde_json::to_string(todos).map_err(TodozError::Serialization)?;
    backend.write(key, &raw)?;
    debug!(key, count = todos.len(), "saved todos");
    Ok(())
}
