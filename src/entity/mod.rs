//! SeaORM entities for the service's single table.

pub mod todo_item;
