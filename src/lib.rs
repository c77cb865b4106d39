//! # Doorman (account front door)
//!
//! `doorman` lets an anonymous visitor register an account and sign in, and
//! routes signed-in users to their landing page.
//!
//! ## Registration
//!
//! A submitted form is validated field by field, then checked for an existing
//! account with the same email. Both kinds of problem are reported as field
//! errors on the redisplayed form; success shows the form again, emptied, with a
//! confirmation banner. The store also enforces email uniqueness, so two
//! concurrent registrations for one address cannot both succeed.
//!
//! ## Sessions
//!
//! A successful login stores the SHA-256 of a random token and hands the raw
//! token to the browser in an `HttpOnly` cookie. `/admin/home` redirects to
//! `/login` when no valid session is presented.
//!
//! ## Views
//!
//! Pages are returned as JSON view models naming the view to render, so any
//! frontend can draw them.

pub mod account;
pub mod api;
pub mod cli;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
