//! Account domain: users, field validation, authentication state and the
//! registration/login workflow.

mod auth;
mod user;
pub mod validation;
pub mod workflow;

pub use auth::{ANONYMOUS_PRINCIPAL, Authentication};
pub use user::{User, normalize_email};
pub use validation::{FieldErrors, UserValidator, Validator};
pub use workflow::{AccountState, AccountWorkflow, Outcome, View};
