//! The plugin entry points the host calls: `query` and `activate`.

use chrono::Utc;
use tracing::{info, warn};

use crate::config::PluginConfig;
use crate::dispatch;
use crate::error::Result;
use crate::host::Host;
use crate::models::{Action, Effect, Icon, ResultItem};
use crate::query::{self, Query};
use crate::storage::TodoStore;

pub struct Plugin {
    store: TodoStore,
    reloaded: bool,
}

impl Plugin {
    pub fn new(config: PluginConfig) -> Result<Self> {
        Ok(Self {
            store: TodoStore::open(config)?,
            reloaded: false,
        })
    }

    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    pub fn action_keyword(&self) -> &str {
        self.store.config().action_keyword()
    }

    /// Rows for a full query-bar line such as `td -c milk`.
    pub fn query(&mut self, raw: &str) -> Result<Vec<ResultItem>> {
        // Pick up edits made to the data file while the plugin sat idle.
        if !self.reloaded {
            self.store.reload()?;
            self.reloaded = true;
        }

        let query = Query::from_raw(raw, self.action_keyword());
        let command = query::parse(&query);
        Ok(dispatch::handle(&command, &query, &self.store, Utc::now()))
    }

    /// Run the row's action against the store.
    pub fn activate(&mut self, item: &ResultItem, host: &mut dyn Host) -> Result<Effect> {
        let base_query = format!("{} ", self.action_keyword());
        info!(action = ?item.action, "activating result");

        let effect = match &item.action {
            Action::AddTodo(content) => match self.store.add(content)? {
                Some(_) => Effect::Requery(base_query),
                None => Effect::NoOp,
            },
            Action::Complete { id, requery } => {
                self.store.complete(*id)?;
                Effect::Requery(requery.clone())
            }
            Action::CompleteAll => {
                self.store.complete_all()?;
                host.show_msg("Success", "all todos done!", Icon::App);
                Effect::Close
            }
            Action::Remove(id) => {
                self.store.remove(*id)?;
                host.show_msg("Success", "todo removed!", Icon::App);
                Effect::Close
            }
            Action::RemoveAll => {
                self.store.remove_all()?;
                host.show_msg("Success", "all todos removed!", Icon::App);
                Effect::Close
            }
            Action::RemoveAllCompleted => {
                self.store.remove_all_completed()?;
                host.show_msg("Success", "all completed todos removed!", Icon::App);
                Effect::Close
            }
            Action::Reload => {
                self.store.reload()?;
                Effect::Requery(base_query)
            }
            Action::ChangeQuery(text) => Effect::Requery(text.clone()),
            Action::CopyContent(text) => {
                if let Err(e) = host.copy_to_clipboard(text) {
                    warn!(error = %e, "clipboard copy failed");
                    host.show_msg("Failed", "Copy failed, please try again later", Icon::App);
                }
                Effect::Close
            }
        };

        Ok(effect)
    }
}
