//! Mapping a parsed command to the rows shown for it.
//!
//! Building rows never touches the disk. Store mutations happen when the
//! host activates a row (see `Plugin::activate`).

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::format::{add_suggestion, todo_results};
use crate::help::help_results;
use crate::models::{Action, Icon, ResultItem, TodoItem};
use crate::query::{Command, CompleteTarget, Query, RemoveTarget};
use crate::storage::TodoStore;

pub fn handle(command: &Command, query: &Query, store: &TodoStore, now: DateTime<Utc>) -> Vec<ResultItem> {
    debug!(?command, "dispatching query");
    let keyword = query.action_keyword.as_str();

    match command {
        Command::Help => help_results(keyword),
        Command::Search(term) => search(store, term, |t| !t.completed, keyword, now),
        Command::List(term) => search(store, term, |_| true, keyword, now),
        Command::Add(content) => vec![add_suggestion(content)],
        Command::Complete(CompleteTarget::All) => vec![ResultItem::new(
            "Mark all todos as done?",
            "click to make all todos as done",
            Icon::App,
            Action::CompleteAll,
        )],
        Command::Complete(CompleteTarget::Matching(term)) => {
            let found = store.find(|t| !t.completed && t.matches(term));
            let requery = query.raw();
            todo_results(
                &found,
                Some("click to mark todo as done"),
                |t| Action::Complete {
                    id: t.id,
                    requery: requery.clone(),
                },
                keyword,
                now,
            )
        }
        Command::Remove(RemoveTarget::All) => vec![ResultItem::new(
            "Remove all todos?",
            "click to remove all todos",
            Icon::App,
            Action::RemoveAll,
        )],
        Command::Remove(RemoveTarget::Done) => vec![ResultItem::new(
            "Remove all completed todos?",
            "click to remove all completed todos",
            Icon::App,
            Action::RemoveAllCompleted,
        )],
        Command::Remove(RemoveTarget::Matching(term)) => {
            let found = store.find(|t| t.matches(term));
            todo_results(
                &found,
                Some("click to remove todo"),
                |t| Action::Remove(t.id),
                keyword,
                now,
            )
        }
        Command::Reload => vec![ResultItem::new(
            "Reload todos from data file?",
            "click to reload",
            Icon::App,
            Action::Reload,
        )],
    }
}

/// Rows for `term` among items passing `condition`. A non-empty term with no
/// match is offered as a new item ahead of the "No results" row.
fn search<F>(store: &TodoStore, term: &str, condition: F, keyword: &str, now: DateTime<Utc>) -> Vec<ResultItem>
where
    F: Fn(&TodoItem) -> bool,
{
    let found = store.find(|t| t.matches(term) && condition(t));
    let mut results = todo_results(
        &found,
        None,
        |t| Action::CopyContent(t.content.clone()),
        keyword,
        now,
    );

    if !term.is_empty() && found.is_empty() {
        results.insert(0, add_suggestion(term));
    }
    results
}
