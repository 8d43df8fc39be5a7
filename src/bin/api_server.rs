// src/bin/api_server.rs

use anyhow::Context;
use dreaming_flowers::infra::logging::init_logging;
use dreaming_flowers::transport;
use dreaming_flowers::{Config, PostgresShopStore, WritePolicy};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let config = Config::from_env().context("invalid configuration")?;
    init_logging(config.log_format);

    // --- Store Initialization ---
    info!(max_connections = config.db_max_connections, "connecting to database");
    let store = PostgresShopStore::connect(&config.database_url, config.db_max_connections)
        .await
        .context("could not connect to the database")?;
    if config.ensure_schema {
        store
            .ensure_schema()
            .await
            .context("could not create the florerias table")?;
    } else if !store.table_exists().await? {
        warn!("table florerias is missing and DB_ENSURE_SCHEMA=false; catalog calls will fail");
    }

    let policy = if config.strict_writes {
        WritePolicy::Strict
    } else {
        WritePolicy::Permissive
    };
    let app_state = transport::http::AppState::new(Arc::new(store), policy);

    // --- API Server Initialization ---
    let app = transport::http::build_app(app_state, config.request_timeout);
    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, ?policy, "API server listening");
    info!(
        "Swagger UI available at http://{}{}",
        addr,
        transport::http::openapi::DOCS_PATH
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
