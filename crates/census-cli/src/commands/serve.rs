use std::sync::Arc;

use anyhow::Context;
use census_api::{AppState, create_router};
use census_config::CensusConfig;
use census_db::CensusDb;
use tracing::info;

use crate::cli::root_commands::ServeArgs;

/// Handle `census serve`.
pub async fn handle(args: &ServeArgs, config: &CensusConfig) -> anyhow::Result<()> {
    let mut server = config.server.clone();
    if let Some(bind) = &args.bind {
        server.bind.clone_from(bind);
    }
    let addr = server.socket_addr()?;

    let db = CensusDb::open(&config.database)
        .await
        .with_context(|| format!("failed to open census store at {}", config.database.path))?;
    let router = create_router(AppState::new(Arc::new(db), server.default_limit), &server);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, database = %config.database.path, "census API listening");

    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
