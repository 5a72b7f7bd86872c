use serde::{Deserialize, Serialize};

pub type TodoId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
}

impl Todo {
    /// Builds a todo, trimming the title the same way every write path does.
    pub fn new(id: TodoId, title: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
        }
    }

    /// The placeholder is the single todo allowed to have no title.
    pub fn is_placeholder(&self) -> bool {
        self.title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_title() {
        let todo = Todo::new(3, "  buy milk \n");
        assert_eq!(todo.title, "buy milk");
        assert!(!todo.is_placeholder());
    }

    #[test]
    fn blank_title_is_placeholder() {
        assert!(Todo::new(1, "   ").is_placeholder());
    }

    #[test]
    fn serializes_as_id_title_record() {
        let json = serde_json::to_string(&Todo::new(7, "x")).unwrap();
        assert_eq!(json, r#"{"id":7,"title":"x"}"#);
    }
}
