use crate::{
    accounts::{AccountService, MemoryStore, SqliteStore},
    api,
    cli::telemetry,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
pub struct Args {
    pub port: u16,
    pub dsn: Option<String>,
}

/// Execute the server action.
///
/// The account store is opened here, handed to the server and closed once
/// the server has shut down. The tracer provider is flushed on every exit
/// path, including a store that fails to open.
///
/// # Errors
/// Returns an error if the store cannot be opened or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let result = serve(args).await;

    telemetry::shutdown_tracer();

    result
}

async fn serve(args: Args) -> Result<()> {
    match args.dsn {
        Some(dsn) => {
            let store = Arc::new(
                SqliteStore::connect(&dsn)
                    .await
                    .with_context(|| format!("Failed to open account store: {dsn}"))?,
            );

            info!("Using SQLite account store");

            let result = api::new(args.port, AccountService::new(store.clone())).await;

            store.close().await;

            result
        }

        None => {
            info!("Using in-memory account store");

            api::new(args.port, AccountService::new(Arc::new(MemoryStore::new()))).await
        }
    }
}
