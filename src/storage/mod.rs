mod file_storage;
mod todo_store;

pub use file_storage::FileStorage;
pub use todo_store::TodoStore;
