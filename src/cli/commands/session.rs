use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::store::MAX_SESSION_TTL_SECONDS;

pub const ARG_SESSION_TTL_SECONDS: &str = "session-ttl-seconds";
pub const ARG_SESSION_COOKIE_SECURE: &str = "session-cookie-secure";

#[derive(Debug, Clone)]
pub struct Options {
    pub ttl_seconds: i64,
    pub cookie_secure: bool,
}

impl Options {
    /// Parse session arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the TTL is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let ttl_seconds = matches
            .get_one::<i64>(ARG_SESSION_TTL_SECONDS)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{ARG_SESSION_TTL_SECONDS}"))?;

        Ok(Self {
            ttl_seconds,
            cookie_secure: matches.get_flag(ARG_SESSION_COOKIE_SECURE),
        })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_SESSION_TTL_SECONDS)
                .long(ARG_SESSION_TTL_SECONDS)
                .help("Session cookie TTL in seconds")
                .env("DOORMAN_SESSION_TTL_SECONDS")
                .default_value("43200")
                .value_parser(clap::value_parser!(i64).range(1..=MAX_SESSION_TTL_SECONDS)),
        )
        .arg(
            Arg::new(ARG_SESSION_COOKIE_SECURE)
                .long(ARG_SESSION_COOKIE_SECURE)
                .help("Mark the session cookie Secure (serve over HTTPS)")
                .env("DOORMAN_SESSION_COOKIE_SECURE")
                .action(ArgAction::SetTrue),
        )
}
