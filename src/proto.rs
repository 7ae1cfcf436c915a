//! Generated protobuf types for the `todo` package, plus explicit
//! conversions between storage rows and wire messages.

use crate::entity::todo_item;

tonic::include_proto!("todo");

impl From<todo_item::Status> for ToDoStatus {
    fn from(status: todo_item::Status) -> Self {
        match status {
            todo_item::Status::NotStarted => ToDoStatus::NotStarted,
            todo_item::Status::InProgress => ToDoStatus::InProgress,
            todo_item::Status::Completed => ToDoStatus::Completed,
        }
    }
}

impl From<ToDoStatus> for todo_item::Status {
    fn from(status: ToDoStatus) -> Self {
        match status {
            ToDoStatus::NotStarted => todo_item::Status::NotStarted,
            ToDoStatus::InProgress => todo_item::Status::InProgress,
            ToDoStatus::Completed => todo_item::Status::Completed,
        }
    }
}

impl From<todo_item::Model> for ReadToDoResponse {
    fn from(item: todo_item::Model) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            to_do_status: ToDoStatus::from(item.status).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::todo_item::{Model, Status};

    #[test]
    fn test_status_round_trip() {
        for status in [Status::NotStarted, Status::InProgress, Status::Completed] {
            assert_eq!(Status::from(ToDoStatus::from(status)), status);
        }
    }

    #[test]
    fn test_model_to_response() {
        let response = ReadToDoResponse::from(Model {
            id: 7,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            status: Status::Completed,
        });

        assert_eq!(response.id, 7);
        assert_eq!(response.title, "Buy milk");
        assert_eq!(response.description, "2%");
        assert_eq!(response.to_do_status(), ToDoStatus::Completed);
    }
}
