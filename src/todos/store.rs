//! The single-table storage contract and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryOrder};

use crate::entity::todo_item::{ActiveModel, Column, Entity, Model, Status};

/// Fields of an item that does not exist yet; the store assigns the id
/// and the initial status.
#[derive(Debug, Clone)]
pub struct NewTodoItem {
    pub title: String,
    pub description: String,
}

/// Single-table CRUD contract consumed by the handler.
///
/// Implementations own all persistence semantics; the handler never sees a
/// connection. Each call is its own transaction.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Persists a new item and returns its assigned id.
    async fn add(&self, item: NewTodoItem) -> Result<i32, DbErr>;

    /// Looks up one item by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, DbErr>;

    /// Returns every stored item in ascending id order.
    async fn list_all(&self) -> Result<Vec<Model>, DbErr>;

    /// Overwrites the row identified by `item.id` with the item's fields.
    async fn save(&self, item: Model) -> Result<(), DbErr>;

    /// Permanently removes the item's row.
    async fn remove(&self, item: Model) -> Result<(), DbErr>;
}

/// [`TodoStore`] backed by a SeaORM connection pool.
#[derive(Debug, Clone)]
pub struct SeaOrmTodoStore {
    conn: DatabaseConnection,
}

impl SeaOrmTodoStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl TodoStore for SeaOrmTodoStore {
    async fn add(&self, item: NewTodoItem) -> Result<i32, DbErr> {
        let inserted = ActiveModel {
            title: Set(item.title),
            description: Set(item.description),
            status: Set(Status::default()),
            ..Default::default()
        }
        .insert(&self.conn)
        .await?;

        Ok(inserted.id)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(&self.conn).await
    }

    async fn list_all(&self) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(&self.conn).await
    }

    async fn save(&self, item: Model) -> Result<(), DbErr> {
        ActiveModel {
            id: Unchanged(item.id),
            title: Set(item.title),
            description: Set(item.description),
            status: Set(item.status),
        }
        .update(&self.conn)
        .await?;

        Ok(())
    }

    async fn remove(&self, item: Model) -> Result<(), DbErr> {
        item.delete(&self.conn).await?;
        Ok(())
    }
}
