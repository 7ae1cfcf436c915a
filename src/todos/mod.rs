//! The to-do domain: storage contract, handler, and error mapping.

pub mod error;
pub mod service;
pub mod store;

pub use error::TodoError;
pub use service::ToDoService;
pub use store::{NewTodoItem, SeaOrmTodoStore, TodoStore};
