//! The request handler behind the five `ToDoIt` RPCs.
//!
//! Stateless per request: validate, perform one store operation, build the
//! response. Validation always runs before any storage access, so a
//! rejected request leaves no partial effects.

use tonic::{Request, Response, Status};

use crate::entity::todo_item::Model;
use crate::proto::to_do_it_server::ToDoIt;
use crate::proto::{
    CreateToDoRequest, CreateToDoResponse, DeleteToDoRequest, DeleteToDoResponse, GetAllRequest,
    GetAllResponse, ReadToDoRequest, ReadToDoResponse, ToDoStatus, UpdateToDoRequest,
    UpdateToDoResponse,
};

use super::error::TodoError;
use super::store::{NewTodoItem, TodoStore};

/// The to-do handler, generic over its storage seam.
///
/// Constructed once at startup with an owned store and shared by the
/// transport across requests.
#[derive(Debug, Clone)]
pub struct ToDoService<S> {
    store: S,
}

impl<S> ToDoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

fn require_positive_id(id: i32) -> Result<(), TodoError> {
    if id <= 0 {
        return Err(TodoError::InvalidArgument(
            "id must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn require_fields(title: &str, description: &str) -> Result<(), TodoError> {
    if title.is_empty() || description.is_empty() {
        return Err(TodoError::InvalidArgument(
            "title and description must be non-empty".to_string(),
        ));
    }
    Ok(())
}

#[tonic::async_trait]
impl<S: TodoStore> ToDoIt for ToDoService<S> {
    async fn create_to_do(
        &self,
        request: Request<CreateToDoRequest>,
    ) -> Result<Response<CreateToDoResponse>, Status> {
        let req = request.into_inner();
        require_fields(&req.title, &req.description)?;

        let id = self
            .store
            .add(NewTodoItem {
                title: req.title,
                description: req.description,
            })
            .await
            .map_err(TodoError::from)?;

        tracing::debug!(id, "created to-do item");
        Ok(Response::new(CreateToDoResponse { id }))
    }

    async fn read_to_do(
        &self,
        request: Request<ReadToDoRequest>,
    ) -> Result<Response<ReadToDoResponse>, Status> {
        let req = request.into_inner();
        require_positive_id(req.id)?;

        let item = self
            .store
            .find_by_id(req.id)
            .await
            .map_err(TodoError::from)?
            .ok_or(TodoError::NotFound(req.id))?;

        Ok(Response::new(item.into()))
    }

    async fn list_to_do(
        &self,
        _request: Request<GetAllRequest>,
    ) -> Result<Response<GetAllResponse>, Status> {
        let items = self.store.list_all().await.map_err(TodoError::from)?;
        let to_do = items.into_iter().map(ReadToDoResponse::from).collect();

        Ok(Response::new(GetAllResponse { to_do }))
    }

    async fn update_to_do(
        &self,
        request: Request<UpdateToDoRequest>,
    ) -> Result<Response<UpdateToDoResponse>, Status> {
        let req = request.into_inner();
        require_positive_id(req.id)?;
        require_fields(&req.title, &req.description)?;
        // A wire value outside the enum is malformed input, same as an
        // empty field; it must not reach the table.
        let status = ToDoStatus::try_from(req.to_do_status).map_err(|_| {
            TodoError::InvalidArgument(format!("unknown to-do status value {}", req.to_do_status))
        })?;

        let item = self
            .store
            .find_by_id(req.id)
            .await
            .map_err(TodoError::from)?
            .ok_or(TodoError::NotFound(req.id))?;

        self.store
            .save(Model {
                id: item.id,
                title: req.title,
                description: req.description,
                status: status.into(),
            })
            .await
            .map_err(TodoError::from)?;

        Ok(Response::new(UpdateToDoResponse { id: req.id }))
    }

    async fn delete_to_do(
        &self,
        request: Request<DeleteToDoRequest>,
    ) -> Result<Response<DeleteToDoResponse>, Status> {
        let req = request.into_inner();
        require_positive_id(req.id)?;

        let item = self
            .store
            .find_by_id(req.id)
            .await
            .map_err(TodoError::from)?
            .ok_or(TodoError::NotFound(req.id))?;

        self.store.remove(item).await.map_err(TodoError::from)?;

        tracing::debug!(id = req.id, "deleted to-do item");
        Ok(Response::new(DeleteToDoResponse { id: req.id }))
    }
}
