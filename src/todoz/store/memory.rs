use super::StorageBackend;
use crate::error::{Result, TodozError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct MemBackend {
    values: HashMap<String, String>,
    writes: usize,
    simulate_write_error: bool,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `value` under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut backend = Self::new();
        backend.values.insert(key.to_string(), value.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error {
            return Err(TodozError::Store("Simulated write error".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Todo;
    use crate::store::{save_todos, TODOS_KEY};

    pub struct StoreFixture {
        pub backend: MemBackend,
        todos: Vec<Todo>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                backend: MemBackend::new(),
                todos: Vec::new(),
            }
        }

        pub fn with_todo(mut self, id: u64, title: &str) -> Self {
            self.todos.push(Todo::new(id, title));
            save_todos(&mut self.backend, TODOS_KEY, &self.todos).unwrap();
            self
        }

        pub fn with_titles(mut self, titles: &[&str]) -> Self {
            for title in titles {
                let id = self.todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
                self = self.with_todo(id, title);
            }
            self
        }

        pub fn build(self) -> MemBackend {
            self.backend
        }
    }
}
