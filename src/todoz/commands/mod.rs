//! # Command Layer
//!
//! Pure business logic for every list mutation. Each command takes the current
//! collection by reference and returns the *next* collection in a
//! [`CmdResult`]; nothing here touches storage. The service decides whether to
//! adopt the new value, and only does so after it has been persisted.
//!
//! A command that returns `Err` has produced no new collection, so a rejected
//! operation cannot leave a half-applied change behind.

use crate::error::{Result, TodozError};
use crate::model::{Todo, TodoId};
use std::collections::HashSet;

pub mod add;
pub mod delete;
pub mod edit;
pub mod sort;

#[derive(Debug)]
pub struct CmdResult<T = ()> {
    /// The collection after the command.
    pub todos: Vec<Todo>,
    /// What the command reports back: the created, renamed or removed todo.
    pub outcome: T,
}

impl CmdResult {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos, outcome: () }
    }
}

impl<T> CmdResult<T> {
    pub fn with_outcome(todos: Vec<Todo>, outcome: T) -> Self {
        Self { todos, outcome }
    }
}

/// Next free id: one past the largest id present, or 1 for an empty list.
///
/// Scans every id, so gaps left by deletes and unsorted ids are both fine.
pub fn next_id(todos: &[Todo]) -> Result<TodoId> {
    match todos.iter().map(|t| t.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(TodozError::IdSpaceExhausted),
    }
}

pub fn has_placeholder(todos: &[Todo]) -> bool {
    todos.iter().any(Todo::is_placeholder)
}

/// Check that a caller-supplied collection respects the list invariants.
pub fn validate(todos: &[Todo]) -> Result<()> {
    let mut seen = HashSet::with_capacity(todos.len());
    for todo in todos {
        if todo.id == 0 {
            return Err(TodozError::InvalidSeed("ids must be positive".to_string()));
        }
        if !seen.insert(todo.id) {
            return Err(TodozError::InvalidSeed(format!("duplicate id {}", todo.id)));
        }
    }
    if todos.iter().filter(|t| t.is_placeholder()).count() > 1 {
        return Err(TodozError::InvalidSeed(
            "more than one todo has an empty title".to_string(),
        ));
    }
    Ok(())
}
