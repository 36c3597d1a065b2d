// Result rows handed to the host, and what activating one of them does

/// Icon variants. The host maps these to its own assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    App,
    Todo,
    Done,
}

/// Work performed when a row is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTodo(String),
    /// Complete one item, then re-issue the query that listed it
    Complete { id: u64, requery: String },
    CompleteAll,
    Remove(u64),
    RemoveAll,
    RemoveAllCompleted,
    Reload,
    ChangeQuery(String),
    CopyContent(String),
}

/// What the host should do with its result view after an activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    NoOp,
    Requery(String),
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub title: String,
    pub subtitle: String,
    pub icon: Icon,
    pub action: Action,
}

impl ResultItem {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, icon: Icon, action: Action) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            icon,
            action,
        }
    }
}
