//! tdq - a personal todo list driven from an app-launcher query bar.
//!
//! The host passes each query-bar line to [`Plugin::query`] and renders the
//! returned rows. Activating a row goes through [`Plugin::activate`], which
//! mutates the store and tells the host what to do next.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod help;
pub mod host;
pub mod models;
pub mod plugin;
pub mod query;
pub mod storage;

pub use config::{PluginConfig, Settings};
pub use error::{Result, TodoError};
pub use host::Host;
pub use models::{Action, Effect, Icon, ResultItem, TodoItem};
pub use plugin::Plugin;
