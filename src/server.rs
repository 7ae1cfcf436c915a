//! Server wiring: the tonic routes merged into an axum router so the same
//! listener also answers the root informational path.

use std::net::SocketAddr;

use axum::routing::get;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tonic::service::Routes;
use tracing::info;

use crate::proto::to_do_it_server::ToDoItServer;
use crate::todos::{SeaOrmTodoStore, ToDoService};

/// Returned on `GET /`; the gRPC endpoints are not browsable.
const LANDING: &str =
    "Communication with this server must be made through a gRPC client; the root path carries no API.";

/// Builds the full router for the service: the five `ToDoIt` RPCs plus the
/// root informational route.
pub fn router(conn: DatabaseConnection) -> axum::Router {
    let service = ToDoService::new(SeaOrmTodoStore::new(conn));

    Routes::new(ToDoItServer::new(service))
        .into_axum_router()
        .route("/", get(|| async { LANDING }))
}

/// Binds the listener and serves until the process is stopped.
pub async fn serve(addr: SocketAddr, conn: DatabaseConnection) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "to-do gRPC server listening");

    axum::serve(listener, router(conn)).await
}
