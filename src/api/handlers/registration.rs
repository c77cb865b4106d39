use axum::{
    Form,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use super::{state::AppState, view::ViewModel};
use crate::account::User;

/// Registration form fields. Missing fields bind as empty strings so the
/// validator can report them.
#[derive(ToSchema, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    name: String,
    #[serde(default, alias = "lastName")]
    last_name: String,
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("email", &self.email)
            .field("password", &"***")
            .field("name", &self.name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

impl From<RegistrationForm> for User {
    fn from(form: RegistrationForm) -> Self {
        Self::candidate(&form.email, &form.password, &form.name, &form.last_name)
    }
}

#[utoipa::path(
    get,
    path = "/registration",
    responses(
        (status = 200, description = "Empty registration form", body = ViewModel),
    ),
    tag = "account"
)]
pub async fn registration_form(state: Extension<Arc<AppState>>) -> ViewModel {
    ViewModel::from(state.workflow().present_registration_form())
}

#[utoipa::path(
    post,
    path = "/registration",
    request_body(content = RegistrationForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Registration view with field errors or a success message", body = ViewModel),
        (status = 500, description = "Identity store failure"),
    ),
    tag = "account"
)]
pub async fn register(
    state: Extension<Arc<AppState>>,
    Form(form): Form<RegistrationForm>,
) -> Response {
    let candidate = User::from(form);
    let validation = state.validator().validate(&candidate);

    match state
        .workflow()
        .submit_registration(candidate, validation)
        .await
    {
        Ok(outcome) => ViewModel::from(outcome).into_response(),
        Err(err) => {
            error!("Error registering user: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
