// File storage - JSON-based persistence for todos

use crate::error::{Result, TodoError};
use crate::models::TodoItem;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct FileStorage {
    file_path: PathBuf,
}

impl FileStorage {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read the whole list. `Ok(None)` means the file does not exist yet.
    pub fn load_todos(&self) -> Result<Option<Vec<TodoItem>>> {
        let contents = match fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(TodoError::DataCorrupt(e.to_string())),
        };

        let todos: Vec<TodoItem> =
            serde_json::from_str(&contents).map_err(|e| TodoError::DataCorrupt(e.to_string()))?;

        Ok(Some(todos))
    }

    /// Rewrite the whole file with `todos`.
    pub fn save_todos(&self, todos: &[TodoItem]) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(TodoError::Persist)?;
            }
        }

        let json = serde_json::to_string_pretty(todos)
            .map_err(|e| TodoError::Persist(io::Error::from(e)))?;

        fs::write(&self.file_path, json).map_err(TodoError::Persist)?;

        Ok(())
    }
}
