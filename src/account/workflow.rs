//! Registration and login routing decisions.
//!
//! Every operation resolves to an [`Outcome`], one variant per view state. The
//! only error that leaves this module is a store failure; duplicate emails and
//! field validation problems are folded into the outcome.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{Authentication, FieldErrors, User};
use crate::store::{self, IdentityStore};

pub const EMAIL_FIELD: &str = "email";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "User already exists with Email id";
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "User registered successfully!!";

/// View selected by an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Login,
    Home,
    Registration,
}

impl View {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Home => "admin/home",
            Self::Registration => "registration",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountState {
    ShowingLogin,
    ShowingHome,
    ShowingRegistrationForm,
    ShowingRegistrationWithErrors,
    ShowingRegistrationSuccess,
}

impl AccountState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShowingLogin => "showing_login",
            Self::ShowingHome => "showing_home",
            Self::ShowingRegistrationForm => "showing_registration_form",
            Self::ShowingRegistrationWithErrors => "showing_registration_with_errors",
            Self::ShowingRegistrationSuccess => "showing_registration_success",
        }
    }
}

/// Result of a workflow operation: the state reached plus its view model.
#[derive(Clone, Debug)]
pub enum Outcome {
    /// `user` is whatever the anonymous principal name resolved to.
    Login { user: Option<User> },
    /// `user` is `None` when the principal has no matching record.
    Home { user: Option<User> },
    RegistrationForm { user: User },
    /// The submitted candidate is kept so the form can be redisplayed.
    RegistrationWithErrors { user: User, errors: FieldErrors },
    /// `user` is a fresh empty template.
    RegistrationSuccess { user: User, message: &'static str },
}

impl Outcome {
    #[must_use]
    pub const fn state(&self) -> AccountState {
        match self {
            Self::Login { .. } => AccountState::ShowingLogin,
            Self::Home { .. } => AccountState::ShowingHome,
            Self::RegistrationForm { .. } => AccountState::ShowingRegistrationForm,
            Self::RegistrationWithErrors { .. } => AccountState::ShowingRegistrationWithErrors,
            Self::RegistrationSuccess { .. } => AccountState::ShowingRegistrationSuccess,
        }
    }

    #[must_use]
    pub const fn view(&self) -> View {
        match self {
            Self::Login { .. } => View::Login,
            Self::Home { .. } => View::Home,
            Self::RegistrationForm { .. }
            | Self::RegistrationWithErrors { .. }
            | Self::RegistrationSuccess { .. } => View::Registration,
        }
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Login { user } | Self::Home { user } => user.as_ref(),
            Self::RegistrationForm { user }
            | Self::RegistrationWithErrors { user, .. }
            | Self::RegistrationSuccess { user, .. } => Some(user),
        }
    }

    #[must_use]
    pub const fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::RegistrationWithErrors { errors, .. } => Some(errors),
            _ => None,
        }
    }

    #[must_use]
    pub const fn success_message(&self) -> Option<&'static str> {
        match self {
            Self::RegistrationSuccess { message, .. } => Some(*message),
            _ => None,
        }
    }
}

/// Decides which account view a request sees and registers new users.
#[derive(Clone)]
pub struct AccountWorkflow {
    identities: Arc<dyn IdentityStore>,
}

impl AccountWorkflow {
    #[must_use]
    pub fn new(identities: Arc<dyn IdentityStore>) -> Self {
        Self { identities }
    }

    /// Route to the home view when authenticated, the login view otherwise.
    ///
    /// The principal name is looked up even for anonymous requests; a missing
    /// record is passed along as `None`.
    ///
    /// # Errors
    /// Returns an error if the identity store lookup fails.
    #[instrument(skip(self))]
    pub async fn present_login_or_home(
        &self,
        auth: &Authentication,
    ) -> Result<Outcome, store::Error> {
        let user = self.identities.find_by_email(auth.name()).await?;

        if auth.is_authenticated() {
            if user.is_none() {
                warn!("Authenticated principal has no matching user record");
            }
            Ok(Outcome::Home { user })
        } else {
            Ok(Outcome::Login { user })
        }
    }

    /// Empty registration form.
    #[must_use]
    pub fn present_registration_form(&self) -> Outcome {
        Outcome::RegistrationForm {
            user: User::default(),
        }
    }

    /// Register `candidate` unless validation or the uniqueness check fails.
    ///
    /// `validation` holds the field-level result computed for `candidate`; a
    /// duplicate email is added to it, never replacing existing messages.
    ///
    /// # Errors
    /// Returns an error if the identity store cannot be queried or written.
    #[instrument(skip(self, candidate, validation), fields(email = %candidate.email))]
    pub async fn submit_registration(
        &self,
        candidate: User,
        mut validation: FieldErrors,
    ) -> Result<Outcome, store::Error> {
        if self
            .identities
            .find_by_email(&candidate.email)
            .await?
            .is_some()
        {
            debug!("User already exists");
            validation.reject(EMAIL_FIELD, DUPLICATE_EMAIL_MESSAGE);
        }

        if validation.has_errors() {
            return Ok(Outcome::RegistrationWithErrors {
                user: candidate,
                errors: validation,
            });
        }

        match self.identities.save(&candidate).await {
            Ok(saved) => {
                info!(user_id = ?saved.id, "User registered");
                Ok(Outcome::RegistrationSuccess {
                    user: User::default(),
                    message: REGISTRATION_SUCCESS_MESSAGE,
                })
            }
            // Lost a race with a concurrent registration for the same email.
            Err(store::Error::Conflict) => {
                debug!("User created concurrently");
                validation.reject(EMAIL_FIELD, DUPLICATE_EMAIL_MESSAGE);
                Ok(Outcome::RegistrationWithErrors {
                    user: candidate,
                    errors: validation,
                })
            }
            Err(err) => Err(err),
        }
    }
}
