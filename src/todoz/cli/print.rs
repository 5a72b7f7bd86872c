use colored::Colorize;
use todoz::error::Result;
use todoz::model::Todo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const PLACEHOLDER_LABEL: &str = "(empty)";

#[derive(Debug, Clone, Copy)]
pub(super) enum MessageLevel {
    Info,
    Success,
    Warning,
}

pub(super) fn print_message(level: MessageLevel, content: &str) {
    match level {
        MessageLevel::Info => println!("{}", content.dimmed()),
        MessageLevel::Success => println!("{}", content.green()),
        MessageLevel::Warning => println!("{}", content.yellow()),
    }
}

pub(super) fn print_todos(todos: &[Todo]) {
    print!("{}", render_todos(todos));
}

pub(super) fn print_todos_json(todos: &[Todo]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(todos)?);
    Ok(())
}

/// One row per todo: right-aligned id, then the title cut to the line width.
pub(super) fn render_todos(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return format!("{}\n", "No todos.".dimmed());
    }

    let id_width = todos
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for todo in todos {
        let idx_str = format!("{:>width$}. ", todo.id, width = id_width);
        let available = LINE_WIDTH.saturating_sub(2 + idx_str.width());

        let title = if todo.is_placeholder() {
            PLACEHOLDER_LABEL.dimmed().italic().to_string()
        } else {
            truncate_to_width(&todo.title, available)
        };

        out.push_str(&format!("  {}{}\n", idx_str.yellow(), title));
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
