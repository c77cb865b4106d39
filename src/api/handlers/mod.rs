//! Route handlers for the account pages and service health.
//!
//! Handlers resolve the session cookie into an [`Authentication`], call the
//! [`AccountWorkflow`] and serialize the resulting outcome as a [`ViewModel`].
//!
//! [`Authentication`]: crate::account::Authentication
//! [`AccountWorkflow`]: crate::account::AccountWorkflow
//! [`ViewModel`]: view::ViewModel

pub mod health;
pub mod home;
pub mod login;
pub mod registration;
pub mod root;
pub(crate) mod session;
mod state;
pub mod view;

pub use state::{AppState, SessionConfig};
