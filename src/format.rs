//! Turning todo items and meta responses into result rows.

use chrono::{DateTime, Utc};

use crate::models::{Action, Icon, ResultItem, TodoItem};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;

/// Human readable age of `created` relative to `now`.
pub fn relative_time(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created).num_seconds().max(1);

    if seconds < MINUTE {
        return if seconds == 1 {
            "one second ago".to_string()
        } else {
            format!("{} seconds ago", seconds)
        };
    }
    if seconds < 60 * MINUTE {
        return format!("{} minutes ago", seconds / MINUTE);
    }
    if seconds < 120 * MINUTE {
        return "an hour ago".to_string();
    }
    if seconds < 24 * HOUR {
        return format!("{} hours ago", seconds / HOUR);
    }
    if seconds < 48 * HOUR {
        return "yesterday".to_string();
    }

    let days = seconds / DAY;
    if seconds < 30 * DAY {
        return format!("{} days ago", days);
    }
    if seconds < 12 * MONTH {
        let months = days / 30;
        return if months <= 1 {
            "one month ago".to_string()
        } else {
            format!("{} months ago", months)
        };
    }

    let years = days / 365;
    if years <= 1 {
        "one year ago".to_string()
    } else {
        format!("{} years ago", years)
    }
}

/// Render `todos` in the order given. `subtitle` replaces the relative time
/// when set. An empty list becomes a single "No results" row.
pub fn todo_results<F>(
    todos: &[&TodoItem],
    subtitle: Option<&str>,
    action: F,
    action_keyword: &str,
    now: DateTime<Utc>,
) -> Vec<ResultItem>
where
    F: Fn(&TodoItem) -> Action,
{
    let mut results: Vec<ResultItem> = todos
        .iter()
        .map(|&todo| {
            let subtitle = match subtitle {
                Some(text) => text.to_string(),
                None => relative_time(todo.created_time, now),
            };
            let icon = if todo.completed { Icon::Done } else { Icon::Todo };
            ResultItem::new(todo.content.clone(), subtitle, icon, action(todo))
        })
        .collect();

    if results.is_empty() {
        results.push(no_results(action_keyword));
    }
    results
}

pub fn no_results(action_keyword: &str) -> ResultItem {
    ResultItem::new(
        "No results",
        "click to view help",
        Icon::App,
        Action::ChangeQuery(format!("{} -h", action_keyword)),
    )
}

pub fn add_suggestion(content: &str) -> ResultItem {
    ResultItem::new(
        format!("add new item \"{}\"", content),
        "",
        Icon::App,
        Action::AddTodo(content.to_string()),
    )
}
