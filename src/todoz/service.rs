//! # List Service
//!
//! [`TodoService`] is the single owner of the todo collection and the only
//! writer to storage. It is a thin layer over the command functions:
//!
//! 1. run the command against the current collection, producing a new one
//! 2. persist the new collection
//! 3. adopt it
//!
//! Steps 2 and 3 are ordered so that a storage failure leaves the service
//! exactly as it was, and a successful return means storage and memory agree.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `TodoService<FileBackend>`
//! - Testing: `TodoService<MemBackend>`
//!
//! The backend is passed in by whoever composes the application; there is no
//! global instance.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{Todo, TodoId};
use crate::store::{load_todos, save_todos, StorageBackend, TODOS_KEY};
use tracing::{debug, info};

pub struct TodoService<B: StorageBackend> {
    backend: B,
    key: String,
    todos: Vec<Todo>,
}

impl<B: StorageBackend> TodoService<B> {
    /// Open the collection under the default key, with no seed.
    pub fn new(backend: B) -> Result<Self> {
        Self::open(backend, TODOS_KEY, Vec::new())
    }

    /// Open the collection under the default key, seeding empty storage.
    pub fn with_seed(backend: B, seed: Vec<Todo>) -> Result<Self> {
        Self::open(backend, TODOS_KEY, seed)
    }

    /// Load the collection stored under `key`.
    ///
    /// When storage holds nothing (or nothing readable), `seed` becomes the
    /// collection and is written straight back, so storage and memory agree
    /// from the start. A populated store ignores the seed.
    pub fn open(backend: B, key: impl Into<String>, seed: Vec<Todo>) -> Result<Self> {
        let key = key.into();
        let loaded = load_todos(&backend, &key)?;

        let mut service = Self {
            backend,
            key,
            todos: loaded,
        };

        if service.todos.is_empty() {
            commands::validate(&seed)?;
            info!(key = %service.key, count = seed.len(), "storage empty, applying seed");
            service.commit(CmdResult::new(seed))?;
        }

        Ok(service)
    }

    /// A copy of the collection in its current order.
    pub fn get_all(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Append a todo with a trimmed `title` (empty for the placeholder).
    pub fn add(&mut self, title: &str) -> Result<Todo> {
        let result = commands::add::run(&self.todos, title)?;
        let added = self.commit(result)?;
        debug!(id = added.id, "todo added");
        Ok(added)
    }

    /// Rename the todo with `id`.
    pub fn edit(&mut self, id: TodoId, title: &str) -> Result<Todo> {
        let result = commands::edit::run(&self.todos, id, title)?;
        let updated = self.commit(result)?;
        debug!(id = updated.id, "todo edited");
        Ok(updated)
    }

    /// Remove the todo with `id`, returning it if it existed.
    ///
    /// Persists even when nothing was removed.
    pub fn delete(&mut self, id: TodoId) -> Result<Option<Todo>> {
        let result = commands::delete::run(&self.todos, id)?;
        let removed = self.commit(result)?;
        debug!(id, removed = removed.is_some(), "todo delete");
        Ok(removed)
    }

    /// Reorder by title, dropping the placeholder.
    pub fn sort(&mut self, ascending: bool) -> Result<()> {
        let result = commands::sort::run(&self.todos, ascending)?;
        self.commit(result)?;
        debug!(ascending, "todos sorted");
        Ok(())
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Persist the command's collection, then adopt it.
    fn commit<T>(&mut self, result: CmdResult<T>) -> Result<T> {
        save_todos(&mut self.backend, &self.key, &result.todos)?;
        self.todos = result.todos;
        Ok(result.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TodozError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemBackend;

    fn stored<B: StorageBackend>(service: &TodoService<B>) -> Vec<Todo> {
        load_todos(service.backend(), service.storage_key()).unwrap()
    }

    fn titles(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn empty_storage_takes_seed_and_persists_it() {
        let seed = vec![Todo::new(1, "")];
        let service = TodoService::with_seed(MemBackend::new(), seed.clone()).unwrap();

        assert_eq!(service.get_all(), seed);
        assert_eq!(stored(&service), seed);
    }

    #[test]
    fn empty_storage_without_seed_persists_empty_list() {
        let service = TodoService::new(MemBackend::new()).unwrap();
        assert!(service.is_empty());
        assert_eq!(
            service.backend().read(TODOS_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn populated_storage_ignores_seed() {
        let backend = StoreFixture::new().with_titles(&["a", "b"]).build();
        let service =
            TodoService::with_seed(backend, vec![Todo::new(9, "seed")]).unwrap();

        assert_eq!(titles(&service.get_all()), vec!["a", "b"]);
        assert_eq!(service.backend().write_count(), 2);
    }

    #[test]
    fn unreadable_storage_is_replaced_by_seed() {
        let backend = MemBackend::with_value(TODOS_KEY, "not json");
        let service = TodoService::with_seed(backend, vec![Todo::new(1, "x")]).unwrap();
        assert_eq!(stored(&service), vec![Todo::new(1, "x")]);
    }

    #[test]
    fn invalid_seed_is_rejected() {
        let seed = vec![Todo::new(1, "a"), Todo::new(1, "b")];
        assert!(matches!(
            TodoService::with_seed(MemBackend::new(), seed),
            Err(TodozError::InvalidSeed(_))
        ));
    }

    #[test]
    fn custom_key_is_used() {
        let mut service = TodoService::open(MemBackend::new(), "LIST", Vec::new()).unwrap();
        service.add("a").unwrap();
        assert!(service.backend().read(TODOS_KEY).unwrap().is_none());
        assert!(service.backend().read("LIST").unwrap().is_some());
    }

    #[test]
    fn get_all_is_a_snapshot() {
        let mut service = TodoService::new(MemBackend::new()).unwrap();
        service.add("a").unwrap();

        let mut snapshot = service.get_all();
        snapshot[0].title.clear();
        snapshot.push(Todo::new(5, "x"));

        assert_eq!(service.get_all(), vec![Todo::new(1, "a")]);
    }

    #[test]
    fn every_mutation_writes_through() {
        let mut service = TodoService::new(MemBackend::new()).unwrap();

        service.add("banana").unwrap();
        assert_eq!(service.get_all(), stored(&service));
        service.add("").unwrap();
        assert_eq!(service.get_all(), stored(&service));
        service.edit(2, "Apple").unwrap();
        assert_eq!(service.get_all(), stored(&service));
        service.add("cherry").unwrap();
        assert_eq!(service.get_all(), stored(&service));
        service.sort(false).unwrap();
        assert_eq!(service.get_all(), stored(&service));
        service.delete(1).unwrap();
        assert_eq!(service.get_all(), stored(&service));

        assert_eq!(titles(&service.get_all()), vec!["cherry", "Apple"]);
    }

    #[test]
    fn second_placeholder_is_rejected_and_not_persisted() {
        let mut service = TodoService::new(MemBackend::new()).unwrap();
        service.add("").unwrap();
        let writes = service.backend().write_count();

        assert!(matches!(
            service.add(""),
            Err(TodozError::DuplicateEmptyTitle)
        ));
        assert_eq!(service.len(), 1);
        assert_eq!(service.backend().write_count(), writes);
    }

    #[test]
    fn ids_follow_max_after_deletes() {
        let backend = StoreFixture::new()
            .with_todo(1, "a")
            .with_todo(3, "c")
            .with_todo(2, "b")
            .build();
        let mut service = TodoService::new(backend).unwrap();

        assert_eq!(service.add("d").unwrap().id, 4);
        service.delete(4).unwrap();
        service.delete(3).unwrap();
        assert_eq!(service.add("e").unwrap().id, 3);
    }

    #[test]
    fn edit_rejects_blank_titles_without_changes() {
        let backend = StoreFixture::new().with_titles(&["a"]).build();
        let mut service = TodoService::new(backend).unwrap();

        assert!(matches!(service.edit(1, ""), Err(TodozError::EmptyTitle)));
        assert!(matches!(service.edit(1, "   "), Err(TodozError::EmptyTitle)));
        assert_eq!(service.get_all(), vec![Todo::new(1, "a")]);
    }

    #[test]
    fn edit_missing_id_is_not_found() {
        let mut service = TodoService::new(MemBackend::new()).unwrap();
        assert!(matches!(
            service.edit(7, "x"),
            Err(TodozError::NotFound(7))
        ));
    }

    #[test]
    fn delete_missing_id_still_persists() {
        let backend = StoreFixture::new().with_titles(&["a"]).build();
        let mut service = TodoService::new(backend).unwrap();
        let writes = service.backend().write_count();

        assert_eq!(service.delete(99).unwrap(), None);
        assert_eq!(service.get_all(), vec![Todo::new(1, "a")]);
        assert_eq!(service.backend().write_count(), writes + 1);
    }

    #[test]
    fn sort_drops_placeholder_and_allows_new_one() {
        let backend = StoreFixture::new()
            .with_titles(&["banana", "Apple", "", "cherry"])
            .build();
        let mut service = TodoService::new(backend).unwrap();

        service.sort(true).unwrap();
        assert_eq!(
            titles(&service.get_all()),
            vec!["Apple", "banana", "cherry"]
        );

        let placeholder = service.add("").unwrap();
        assert_eq!(placeholder.id, 5);
    }

    #[test]
    fn sort_puts_underscore_titles_after_letters() {
        let mut service = TodoService::new(MemBackend::new()).unwrap();
        service.add("_underscore").unwrap();
        service.add("banana").unwrap();

        service.sort(true).unwrap();
        assert_eq!(titles(&service.get_all()), vec!["banana", "_underscore"]);
        assert_eq!(stored(&service), service.get_all());
    }

    #[test]
    fn failed_write_leaves_state_unchanged() {
        let backend = StoreFixture::new().with_titles(&["a", "b"]).build();
        let mut service = TodoService::new(backend).unwrap();
        let before = service.get_all();

        let mut backend = service.into_backend();
        backend.set_simulate_write_error(true);
        let mut service = TodoService::new(backend).unwrap();

        assert!(matches!(service.add("c"), Err(TodozError::Store(_))));
        assert!(service.edit(1, "z").is_err());
        assert!(service.delete(2).is_err());
        assert!(service.sort(false).is_err());
        assert_eq!(service.get_all(), before);
        assert_eq!(stored(&service), before);
    }

    #[test]
    fn reopening_reproduces_collection() {
        let mut service =
            TodoService::with_seed(MemBackend::new(), vec![Todo::new(1, "")]).unwrap();
        service.edit(1, "first").unwrap();
        service.add("second").unwrap();
        service.sort(false).unwrap();
        let before = service.get_all();

        let reopened = TodoService::with_seed(service.into_backend(), Vec::new()).unwrap();
        assert_eq!(reopened.get_all(), before);
    }
}
