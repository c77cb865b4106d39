use anyhow::{Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command};

pub const ARG_DSN: &str = "dsn";
pub const ARG_IN_MEMORY: &str = "in-memory";
pub const ARG_DB_MAX_CONNECTIONS: &str = "db-max-connections";

/// Where user and session records live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Postgres { dsn: String, max_connections: u32 },
    InMemory,
}

#[derive(Debug, Clone)]
pub struct Options {
    pub backend: Backend,
}

impl Options {
    /// Parse storage arguments from matches.
    ///
    /// # Errors
    /// Returns an error if neither a DSN nor `--in-memory` was given.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        if matches.get_flag(ARG_IN_MEMORY) {
            return Ok(Self {
                backend: Backend::InMemory,
            });
        }

        let dsn = matches
            .get_one::<String>(ARG_DSN)
            .cloned()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("missing required argument: --{ARG_DSN}"))?;
        let max_connections = matches
            .get_one::<u32>(ARG_DB_MAX_CONNECTIONS)
            .copied()
            .unwrap_or(5);

        Ok(Self {
            backend: Backend::Postgres {
                dsn,
                max_connections,
            },
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_DSN)
                .short('d')
                .long(ARG_DSN)
                .help("Database connection string")
                .env("DOORMAN_DSN")
                .required_unless_present(ARG_IN_MEMORY),
        )
        .arg(
            Arg::new(ARG_IN_MEMORY)
                .long(ARG_IN_MEMORY)
                .help("Keep users and sessions in memory instead of Postgres (development only)")
                .env("DOORMAN_IN_MEMORY")
                .action(ArgAction::SetTrue)
                .conflicts_with(ARG_DSN),
        )
        .arg(
            Arg::new(ARG_DB_MAX_CONNECTIONS)
                .long(ARG_DB_MAX_CONNECTIONS)
                .help("Maximum number of pooled database connections")
                .env("DOORMAN_DB_MAX_CONNECTIONS")
                .default_value("5")
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
}
