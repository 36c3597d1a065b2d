// Todo model - A single item of the todo list as persisted in the data file

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: u64,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
    pub created_time: DateTime<Utc>,
}

impl TodoItem {
    pub fn new(id: u64, content: String) -> Self {
        Self::with_created_time(id, content, Utc::now())
    }

    pub fn with_created_time(id: u64, content: String, created_time: DateTime<Utc>) -> Self {
        Self {
            id,
            content,
            completed: false,
            created_time,
        }
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Case-insensitive substring match on the content. An empty term matches everything.
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty() || self.content.to_lowercase().contains(&term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_case_insensitive() {
        let todo = TodoItem::new(1, "Buy Milk".to_string());
        assert!(todo.matches("milk"));
        assert!(todo.matches("BUY"));
        assert!(todo.matches(""));
        assert!(!todo.matches("bread"));
    }

    #[test]
    fn test_serialized_field_names() {
        let todo = TodoItem::new(7, "write report".to_string());
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["content"], "write report");
        assert_eq!(json["completed"], false);
        assert!(json["createdTime"].is_string());
    }
}
