//! A small gRPC to-do service backed by SQLite through SeaORM.
//!
//! The crate is thin plumbing: the [`todos::ToDoService`] handler validates
//! each request, performs one storage operation through the
//! [`todos::TodoStore`] contract, and returns the response or a typed
//! failure. Everything else — configuration, database setup, migrations,
//! tracing, server wiring — exists to make that handler runnable.

pub mod config;
pub mod database;
pub mod entity;
pub mod migrations;
pub mod observability;
pub mod proto;
pub mod server;
pub mod todos;
