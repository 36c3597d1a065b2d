//! Query grammar.
//!
//! The host hands over the text typed after the action keyword. The first
//! whitespace-separated token selects a command when it starts with `-`,
//! anything else is a search over open todos.

/// A query split the way the grammar needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub action_keyword: String,
    /// Free text after the keyword, trimmed.
    pub search: String,
    pub first: String,
    pub second: String,
    /// Everything after the first token, inner whitespace preserved.
    pub second_to_end: String,
}

impl Query {
    pub fn new(action_keyword: &str, search: &str) -> Self {
        let search = search.trim();
        let (first, rest) = split_token(search);
        let (second, _) = split_token(rest);

        Self {
            action_keyword: action_keyword.to_string(),
            search: search.to_string(),
            first: first.to_string(),
            second: second.to_string(),
            second_to_end: rest.to_string(),
        }
    }

    /// Split a raw query-bar line into keyword and free text. A line that
    /// does not start with the keyword is taken as free text in full.
    pub fn from_raw(raw: &str, action_keyword: &str) -> Self {
        let trimmed = raw.trim_start();
        let (head, rest) = split_token(trimmed);
        if head == action_keyword {
            Self::new(action_keyword, rest)
        } else {
            Self::new(action_keyword, trimmed)
        }
    }

    /// The full query-bar line for this query.
    pub fn raw(&self) -> String {
        format!("{} {}", self.action_keyword, self.search)
    }
}

fn split_token(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], text[idx..].trim_start()),
        None => (text, ""),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompleteTarget {
    All,
    Matching(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveTarget {
    All,
    Done,
    Matching(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search open todos only
    Search(String),
    Help,
    /// Search all todos, completed ones included
    List(String),
    Add(String),
    Complete(CompleteTarget),
    Remove(RemoveTarget),
    Reload,
}

pub fn parse(query: &Query) -> Command {
    if query.first == "-" {
        return Command::Help;
    }

    let Some(flag) = query.first.strip_prefix('-') else {
        return Command::Search(query.search.clone());
    };

    let term = query.second_to_end.clone();
    match flag.to_ascii_lowercase().as_str() {
        "h" => Command::Help,
        "l" => Command::List(term),
        "a" => Command::Add(term),
        "rl" => Command::Reload,
        "c" if query.second.eq_ignore_ascii_case("--all") => Command::Complete(CompleteTarget::All),
        "c" => Command::Complete(CompleteTarget::Matching(term)),
        "r" if query.second.eq_ignore_ascii_case("--all") => Command::Remove(RemoveTarget::All),
        "r" if query.second.eq_ignore_ascii_case("--done") => Command::Remove(RemoveTarget::Done),
        "r" => Command::Remove(RemoveTarget::Matching(term)),
        _ => Command::Search(query.search.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_text(text: &str) -> Command {
        parse(&Query::new("td", text))
    }

    #[test]
    fn test_split_parts() {
        let query = Query::new("td", "  -a   buy  some milk  ");
        assert_eq!(query.search, "-a   buy  some milk");
        assert_eq!(query.first, "-a");
        assert_eq!(query.second, "buy");
        assert_eq!(query.second_to_end, "buy  some milk");
    }

    #[test]
    fn test_empty_and_plain_text_search_open_items() {
        assert_eq!(parse_text(""), Command::Search(String::new()));
        assert_eq!(parse_text("milk run"), Command::Search("milk run".to_string()));
    }

    #[test]
    fn test_dash_alone_is_help() {
        assert_eq!(parse_text("-"), Command::Help);
        assert_eq!(parse_text("-h"), Command::Help);
        assert_eq!(parse_text("-H"), Command::Help);
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        assert_eq!(parse_text("-A milk"), Command::Add("milk".to_string()));
        assert_eq!(parse_text("-L"), Command::List(String::new()));
        assert_eq!(parse_text("-RL"), Command::Reload);
    }

    #[test]
    fn test_list_and_add_take_whole_remainder() {
        assert_eq!(parse_text("-l foo bar"), Command::List("foo bar".to_string()));
        assert_eq!(parse_text("-a call   mum"), Command::Add("call   mum".to_string()));
    }

    #[test]
    fn test_complete_modifiers() {
        assert_eq!(parse_text("-c --all"), Command::Complete(CompleteTarget::All));
        assert_eq!(parse_text("-c --ALL"), Command::Complete(CompleteTarget::All));
        assert_eq!(
            parse_text("-c milk"),
            Command::Complete(CompleteTarget::Matching("milk".to_string()))
        );
        assert_eq!(
            parse_text("-c --done"),
            Command::Complete(CompleteTarget::Matching("--done".to_string()))
        );
    }

    #[test]
    fn test_remove_modifiers() {
        assert_eq!(parse_text("-r --all"), Command::Remove(RemoveTarget::All));
        assert_eq!(parse_text("-r --Done"), Command::Remove(RemoveTarget::Done));
        assert_eq!(
            parse_text("-r"),
            Command::Remove(RemoveTarget::Matching(String::new()))
        );
    }

    #[test]
    fn test_unknown_flag_searches_entire_text() {
        assert_eq!(parse_text("-x foo"), Command::Search("-x foo".to_string()));
        assert_eq!(parse_text("--all"), Command::Search("--all".to_string()));
    }

    #[test]
    fn test_from_raw_strips_keyword() {
        let query = Query::from_raw("td -c milk", "td");
        assert_eq!(query.search, "-c milk");
        assert_eq!(query.raw(), "td -c milk");

        let bare = Query::from_raw("td", "td");
        assert_eq!(bare.search, "");

        let foreign = Query::from_raw("tdx milk", "td");
        assert_eq!(foreign.search, "tdx milk");
    }
}
