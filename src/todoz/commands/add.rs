use crate::commands::{has_placeholder, next_id, CmdResult};
use crate::error::{Result, TodozError};
use crate::model::Todo;

/// Append a todo. Only one untitled todo may exist at a time, so adding while
/// the placeholder is still empty is rejected whatever the new title is.
pub fn run(todos: &[Todo], title: &str) -> Result<CmdResult<Todo>> {
    if has_placeholder(todos) {
        return Err(TodozError::DuplicateEmptyTitle);
    }

    let todo = Todo::new(next_id(todos)?, title);
    let mut next = Vec::with_capacity(todos.len() + 1);
    next.extend_from_slice(todos);
    next.push(todo.clone());

    Ok(CmdResult::with_outcome(next, todo))
}
