use crate::{
    api::{self, AppState, SessionConfig},
    cli::commands::database::Backend,
    store::{MemoryStore, PgStore},
};
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::{sync::Arc, time::Duration};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub backend: Backend,
    pub session_ttl_seconds: i64,
    pub session_cookie_secure: bool,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the database is unreachable, the schema cannot be
/// applied, or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let session_config = SessionConfig::new()
        .with_ttl_seconds(args.session_ttl_seconds)
        .with_cookie_secure(args.session_cookie_secure);

    debug!("Session config: {:?}", session_config);

    let state = match args.backend {
        Backend::Postgres {
            dsn,
            max_connections,
        } => {
            let pool = PgPoolOptions::new()
                .min_connections(1)
                .max_connections(max_connections)
                .max_lifetime(Duration::from_secs(60 * 2))
                .test_before_acquire(true)
                .connect(&dsn)
                .await
                .context("Failed to connect to database")?;

            let store = Arc::new(PgStore::new(pool));
            store
                .apply_schema()
                .await
                .context("Failed to apply database schema")?;

            info!("Using Postgres store");
            AppState::new(store.clone(), store, session_config)
        }
        Backend::InMemory => {
            warn!("Using in-memory store, users and sessions are lost on restart");
            let store = Arc::new(MemoryStore::new());
            AppState::new(store.clone(), store, session_config)
        }
    };

    api::new(args.port, Arc::new(state)).await
}
