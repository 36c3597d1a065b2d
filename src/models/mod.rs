mod result;
mod todo;

pub use result::{Action, Effect, Icon, ResultItem};
pub use todo::TodoItem;
