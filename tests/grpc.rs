//! End-to-end tests: a real tonic client against a served instance on an
//! ephemeral port, each test with its own in-memory database.

use std::net::SocketAddr;

use todo_grpc::database::DatabaseConfig;
use todo_grpc::migrations;
use todo_grpc::proto::to_do_it_client::ToDoItClient;
use todo_grpc::proto::{
    CreateToDoRequest, DeleteToDoRequest, GetAllRequest, ReadToDoRequest, ToDoStatus,
    UpdateToDoRequest,
};
use todo_grpc::server;
use tonic::Code;
use tonic::transport::Channel;

async fn start_server() -> SocketAddr {
    // A single pooled connection keeps the in-memory database alive across
    // checkouts.
    let conn = DatabaseConfig::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .connect()
        .await
        .expect("in-memory database should connect");
    migrations::run_pending(&conn)
        .await
        .expect("migrations should apply");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port should bind");
    let addr = listener.local_addr().expect("listener has a local addr");

    tokio::spawn(async move {
        axum::serve(listener, server::router(conn))
            .await
            .expect("server runs until the test ends");
    });

    addr
}

async fn connect(addr: SocketAddr) -> ToDoItClient<Channel> {
    ToDoItClient::connect(format!("http://{addr}"))
        .await
        .expect("client should connect")
}

#[tokio::test]
async fn test_full_crud_lifecycle_over_the_wire() {
    let addr = start_server().await;
    let mut client = connect(addr).await;

    let created = client
        .create_to_do(CreateToDoRequest {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(created.id, 1);

    let item = client
        .read_to_do(ReadToDoRequest { id: created.id })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(item.title, "Buy milk");
    assert_eq!(item.description, "2%");
    assert_eq!(item.to_do_status(), ToDoStatus::NotStarted);

    let updated = client
        .update_to_do(UpdateToDoRequest {
            id: created.id,
            title: "Buy milk".to_string(),
            description: "Whole".to_string(),
            to_do_status: ToDoStatus::Completed.into(),
        })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(updated.id, created.id);

    let item = client
        .read_to_do(ReadToDoRequest { id: created.id })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(item.description, "Whole");
    assert_eq!(item.to_do_status(), ToDoStatus::Completed);

    let listed = client.list_to_do(GetAllRequest {}).await.unwrap().into_inner();
    assert_eq!(listed.to_do.len(), 1);
    assert_eq!(listed.to_do[0].id, created.id);

    let deleted = client
        .delete_to_do(DeleteToDoRequest { id: created.id })
        .await
        .unwrap()
        .into_inner();
    assert_eq!(deleted.id, created.id);

    let err = client
        .read_to_do(ReadToDoRequest { id: created.id })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
}

#[tokio::test]
async fn test_invalid_input_is_rejected_before_storage() {
    let addr = start_server().await;
    let mut client = connect(addr).await;

    let err = client
        .create_to_do(CreateToDoRequest {
            title: String::new(),
            description: "2%".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);

    let err = client
        .read_to_do(ReadToDoRequest { id: 0 })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);

    let err = client
        .update_to_do(UpdateToDoRequest {
            id: -1,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            to_do_status: ToDoStatus::Completed.into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);

    let err = client
        .delete_to_do(DeleteToDoRequest { id: 0 })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);

    // Nothing was persisted along the way.
    let listed = client.list_to_do(GetAllRequest {}).await.unwrap().into_inner();
    assert!(listed.to_do.is_empty());
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let addr = start_server().await;
    let mut client = connect(addr).await;

    let err = client
        .read_to_do(ReadToDoRequest { id: 42 })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::NotFound);

    let err = client
        .update_to_do(UpdateToDoRequest {
            id: 42,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            to_do_status: ToDoStatus::InProgress.into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::NotFound);

    let err = client
        .delete_to_do(DeleteToDoRequest { id: 42 })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
}

#[tokio::test]
async fn test_root_path_serves_informational_text() {
    let addr = start_server().await;

    let body = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("root path should answer plain HTTP")
        .text()
        .await
        .expect("body should be readable");

    assert!(body.contains("gRPC client"));
}
