// Todo store - The in-memory todo list, rewritten to disk after every mutation

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::FileStorage;
use crate::config::PluginConfig;
use crate::error::{Result, TodoError};
use crate::models::TodoItem;

pub struct TodoStore {
    config: PluginConfig,
    storage: FileStorage,
    todos: Vec<TodoItem>,
    /// Set while the data file is unreadable; mutations are refused until a reload succeeds.
    broken: Option<String>,
}

impl TodoStore {
    /// Build a store for `config` and load its data file.
    pub fn open(config: PluginConfig) -> Result<Self> {
        let storage = FileStorage::new(config.data_file_path());
        let mut store = Self {
            config,
            storage,
            todos: Vec::new(),
            broken: None,
        };
        store.load()?;
        Ok(store)
    }

    /// Re-resolve the data file path and read it. A missing file becomes an
    /// empty list that is written out immediately. On failure the previous
    /// list stays in memory but nothing is written until a later load succeeds.
    pub fn load(&mut self) -> Result<()> {
        let storage = FileStorage::new(self.config.data_file_path());

        let todos = match storage.load_todos() {
            Ok(Some(todos)) => {
                info!(path = %storage.path().display(), count = todos.len(), "loaded todos");
                todos
            }
            Ok(None) => {
                info!(path = %storage.path().display(), "data file missing, creating empty list");
                storage.save_todos(&[])?;
                Vec::new()
            }
            Err(TodoError::DataCorrupt(cause)) => {
                warn!(path = %storage.path().display(), %cause, "data file unreadable");
                self.broken = Some(cause.clone());
                return Err(TodoError::DataCorrupt(cause));
            }
            Err(e) => return Err(e),
        };

        self.storage = storage;
        self.todos = todos;
        self.broken = None;
        Ok(())
    }

    pub fn reload(&mut self) -> Result<()> {
        self.load()
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn data_path(&self) -> &std::path::Path {
        self.storage.path()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn max_id(&self) -> u64 {
        self.todos.iter().map(|t| t.id).max().unwrap_or(0)
    }

    /// Add a new item created now. Blank content is ignored and yields `None`.
    pub fn add(&mut self, content: &str) -> Result<Option<u64>> {
        self.add_at(content, Utc::now())
    }

    pub fn add_at(&mut self, content: &str, created_time: DateTime<Utc>) -> Result<Option<u64>> {
        if content.trim().is_empty() {
            return Ok(None);
        }

        let id = self.max_id() + 1;
        self.update(|todos| {
            todos.push(TodoItem::with_created_time(id, content.to_string(), created_time))
        })?;
        debug!(id, "added todo");
        Ok(Some(id))
    }

    pub fn remove(&mut self, id: u64) -> Result<()> {
        self.update(|todos| todos.retain(|t| t.id != id))
    }

    pub fn remove_all(&mut self) -> Result<()> {
        self.update(Vec::clear)
    }

    pub fn remove_all_completed(&mut self) -> Result<()> {
        self.update(|todos| todos.retain(|t| !t.completed))
    }

    pub fn complete(&mut self, id: u64) -> Result<()> {
        self.update(|todos| {
            if let Some(todo) = todos.iter_mut().find(|t| t.id == id) {
                todo.mark_completed();
            }
        })
    }

    pub fn complete_all(&mut self) -> Result<()> {
        self.update(|todos| todos.iter_mut().for_each(TodoItem::mark_completed))
    }

    /// Every item matching `predicate`, most recently created first.
    /// Items created at the same instant keep their stored order.
    pub fn find<F>(&self, predicate: F) -> Vec<&TodoItem>
    where
        F: Fn(&TodoItem) -> bool,
    {
        let mut found: Vec<&TodoItem> = self.todos.iter().filter(|t| predicate(*t)).collect();
        found.sort_by(|a, b| b.created_time.cmp(&a.created_time));
        found
    }

    /// Apply `change` to a copy of the list and keep it only once it is on disk.
    fn update<F>(&mut self, change: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<TodoItem>),
    {
        if let Some(cause) = &self.broken {
            return Err(TodoError::DataCorrupt(cause.clone()));
        }

        let mut todos = self.todos.clone();
        change(&mut todos);
        self.storage.save_todos(&todos)?;
        self.todos = todos;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CONFIG_FILE, DATA_FILE};
    use chrono::Duration;
    use std::fs;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> TodoStore {
        TodoStore::open(PluginConfig::load(dir.path()).unwrap()).unwrap()
    }

    #[test]
    fn test_fresh_install_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert!(store.is_empty());
        assert_eq!(store.max_id(), 0);

        let contents = fs::read_to_string(dir.path().join(DATA_FILE)).unwrap();
        assert_eq!(contents.trim(), "[]");
    }

    #[test]
    fn test_add_assigns_next_id() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        assert_eq!(store.add("first").unwrap(), Some(1));
        assert_eq!(store.add("second").unwrap(), Some(2));
        store.remove(2).unwrap();
        assert_eq!(store.add("third").unwrap(), Some(2));
        store.remove(1).unwrap();
        assert_eq!(store.add("fourth").unwrap(), Some(3));
    }

    #[test]
    fn test_add_blank_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        assert_eq!(store.add("").unwrap(), None);
        assert_eq!(store.add("   ").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_id_keeps_list() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("a").unwrap();
        store.add("b").unwrap();

        store.remove(42).unwrap();
        assert_eq!(store.len(), 2);

        store.remove(1).unwrap();
        assert!(store.find(|t| t.id == 1).is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_complete_all_leaves_nothing_open() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("a").unwrap();
        store.add("b").unwrap();
        store.complete(99).unwrap();

        store.complete_all().unwrap();
        assert!(store.find(|t| !t.completed).is_empty());
    }

    #[test]
    fn test_remove_all_completed_keeps_open_items() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("open one").unwrap();
        store.add("done one").unwrap();
        store.add("open two").unwrap();
        store.complete(2).unwrap();

        let open_before: Vec<u64> = store.find(|t| !t.completed).iter().map(|t| t.id).collect();
        store.remove_all_completed().unwrap();
        let open_after: Vec<u64> = store.find(|t| !t.completed).iter().map(|t| t.id).collect();

        assert!(store.find(|t| t.completed).is_empty());
        assert_eq!(open_before, open_after);
    }

    #[test]
    fn test_remove_all_empties_store() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("a").unwrap();
        store.remove_all().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_find_orders_newest_first() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let base = Utc::now();
        store.add_at("old", base - Duration::hours(2)).unwrap();
        store.add_at("newest", base).unwrap();
        store.add_at("middle", base - Duration::hours(1)).unwrap();

        let titles: Vec<&str> = store.find(|_| true).iter().map(|t| t.content.as_str()).collect();
        assert_eq!(titles, vec!["newest", "middle", "old"]);
    }

    #[test]
    fn test_find_keeps_stored_order_for_ties() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let at = Utc::now();
        store.add_at("a", at).unwrap();
        store.add_at("b", at).unwrap();
        store.add_at("c", at).unwrap();

        let ids: Vec<u64> = store.find(|_| true).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("keep me").unwrap();
        store.add("finish me").unwrap();
        store.complete(2).unwrap();
        let before: Vec<TodoItem> = store.find(|_| true).into_iter().cloned().collect();

        let reopened = open_store(&dir);
        let after: Vec<TodoItem> = reopened.find(|_| true).into_iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reload_picks_up_external_edits() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("mine").unwrap();

        let mut other = open_store(&dir);
        other.add("theirs").unwrap();

        assert_eq!(store.len(), 1);
        store.reload().unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_corrupt_file_fails_load() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DATA_FILE), "not json").unwrap();

        let result = TodoStore::open(PluginConfig::load(dir.path()).unwrap());
        let err = result.err().expect("corrupt data must fail");
        assert!(matches!(err, TodoError::DataCorrupt(_)));
        assert!(err.to_string().starts_with("data file broken: "));
    }

    #[test]
    fn test_reload_follows_config_file() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("default location").unwrap();

        let moved = dir.path().join("moved.json");
        fs::write(dir.path().join(CONFIG_FILE), moved.display().to_string()).unwrap();
        store.reload().unwrap();

        assert_eq!(store.data_path(), moved.as_path());
        assert!(store.is_empty());
        assert!(moved.exists());
    }

    #[test]
    fn test_failed_reload_keeps_broken_file_untouched() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("mine").unwrap();

        let path = dir.path().join(DATA_FILE);
        let hand_edited = r#"[{"id":1,"content":"hand edited" BROKEN"#;
        fs::write(&path, hand_edited).unwrap();

        assert!(matches!(store.reload(), Err(TodoError::DataCorrupt(_))));
        assert!(matches!(store.add("another"), Err(TodoError::DataCorrupt(_))));
        assert!(matches!(store.complete_all(), Err(TodoError::DataCorrupt(_))));
        assert!(matches!(store.remove_all(), Err(TodoError::DataCorrupt(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), hand_edited);

        fs::write(&path, "[]").unwrap();
        store.reload().unwrap();
        assert_eq!(store.add("after repair").unwrap(), Some(1));
    }

    #[test]
    fn test_persist_failure_leaves_list_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        store.add("kept").unwrap();

        // A directory in place of the data file makes every write fail
        let path = dir.path().join(DATA_FILE);
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(matches!(store.add("lost"), Err(TodoError::Persist(_))));
        assert!(matches!(store.complete(1), Err(TodoError::Persist(_))));
        assert!(matches!(store.remove_all(), Err(TodoError::Persist(_))));

        assert_eq!(store.len(), 1);
        assert_eq!(store.max_id(), 1);
        assert!(store.find(|t| t.completed).is_empty());
    }
}
