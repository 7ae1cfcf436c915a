//! Schema migrations, applied at startup before the server accepts traffic.

use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;

mod m20260807_000001_create_todo_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260807_000001_create_todo_items::Migration)]
    }
}

/// Applies all pending migrations.
pub async fn run_pending(conn: &DatabaseConnection) -> Result<(), DbErr> {
    tracing::info!("running pending database migrations");
    Migrator::up(conn, None).await?;
    tracing::info!("database schema is up to date");
    Ok(())
}
