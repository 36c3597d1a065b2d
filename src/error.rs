// Error module - Error types for the todo plugin
// Store-level failures are fatal and surfaced to the user as-is.
// Validation no-ops (blank content, unknown ids) are not errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    /// Data file exists but could not be read or parsed
    #[error("data file broken: {0}!")]
    DataCorrupt(String),

    /// Writing the data file failed
    #[error("write data failed: {0}!")]
    Persist(#[source] std::io::Error),

    /// Settings blob could not be read or written
    #[error("settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;

impl TodoError {
    /// Short title used when the error is shown as a notification.
    pub fn title(&self) -> &'static str {
        match self {
            TodoError::DataCorrupt(_) => "Data file broken",
            TodoError::Persist(_) => "Write failed",
            TodoError::Settings(_) => "Settings",
        }
    }

    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
