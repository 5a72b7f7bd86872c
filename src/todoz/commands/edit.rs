use crate::commands::CmdResult;
use crate::error::{Result, TodozError};
use crate::model::{Todo, TodoId};

/// Rename a todo in place. Titles cannot be cleared here, so edit can never
/// produce a second placeholder.
pub fn run(todos: &[Todo], id: TodoId, title: &str) -> Result<CmdResult<Todo>> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TodozError::EmptyTitle);
    }

    let index = todos
        .iter()
        .position(|t| t.id == id)
        .ok_or(TodozError::NotFound(id))?;

    let mut next = todos.to_vec();
    next[index].title = title.to_string();
    let updated = next[index].clone();

    Ok(CmdResult::with_outcome(next, updated))
}
