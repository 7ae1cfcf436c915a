use anyhow::Context;
use tracing::info;

use todo_grpc::config::{self, AppConfig};
use todo_grpc::migrations;
use todo_grpc::observability::TracingConfig;
use todo_grpc::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    TracingConfig::from_env().init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let conn = config
        .database
        .connect()
        .await
        .context("failed to connect to the database")?;
    migrations::run_pending(&conn)
        .await
        .context("failed to apply database migrations")?;

    info!(addr = %config.bind_addr, "starting to-do gRPC service");
    server::serve(config.bind_addr, conn)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
