use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Todo, TodoId};

/// Remove the todo with `id`. Unknown ids are a no-op, not an error.
pub fn run(todos: &[Todo], id: TodoId) -> Result<CmdResult<Option<Todo>>> {
    let mut next = todos.to_vec();
    let removed = next.iter().position(|t| t.id == id).map(|i| next.remove(i));

    Ok(CmdResult::with_outcome(next, removed))
}
