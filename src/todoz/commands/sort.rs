use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Todo;

/// Sort by title, ignoring case by comparing upper-cased titles, so
/// punctuation such as `_` or `[` lands after the letters. The placeholder has
/// nothing to sort on and is dropped. Equal titles keep their relative order;
/// descending is the ascending result reversed.
pub fn run(todos: &[Todo], ascending: bool) -> Result<CmdResult> {
    let mut keyed: Vec<(String, Todo)> = todos
        .iter()
        .filter(|t| !t.is_placeholder())
        .map(|t| (t.title.to_uppercase(), t.clone()))
        .collect();

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    if !ascending {
        keyed.reverse();
    }

    Ok(CmdResult::new(keyed.into_iter().map(|(_, t)| t).collect()))
}
