//! Map validated CLI arguments to the action the binary runs.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{ARG_PORT, database, session};
use anyhow::{Context, Result};
use url::Url;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or the DSN is not a URL.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8080);

    let database = database::Options::parse(matches)?;
    if let database::Backend::Postgres { dsn, .. } = &database.backend {
        Url::parse(dsn).context("invalid DOORMAN_DSN")?;
    }

    let session = session::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        backend: database.backend,
        session_ttl_seconds: session.ttl_seconds,
        session_cookie_secure: session.cookie_secure,
    }))
}
