// Help rows - one per command, each pre-filling the query bar

use crate::models::{Action, Icon, ResultItem};

const ENTRIES: &[(&str, &str, &str)] = &[
    ("-a [text]", "add todos", "-a "),
    ("-rl", "reload todos from data file", "-rl"),
    ("[keyword]", "list todos", ""),
    ("-l [keyword]", "list all todos, include completed todos", "-l "),
    ("-r [keyword]", "remove todos", "-r "),
    ("-r --all", "remove all todos", "-r --all"),
    ("-r --done", "remove all completed todos", "-r --done"),
    ("-c [keyword]", "mark todo as done", "-c "),
    ("-c --all", "mark all todos as done", "-c --all"),
];

pub fn help_results(action_keyword: &str) -> Vec<ResultItem> {
    ENTRIES
        .iter()
        .map(|(usage, description, skeleton)| {
            ResultItem::new(
                format!("{} {}", action_keyword, usage),
                *description,
                Icon::App,
                Action::ChangeQuery(format!("{} {}", action_keyword, skeleton)),
            )
        })
        .collect()
}
