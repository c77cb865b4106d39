//! JSON view models handed to whatever renders the pages.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::account::{Outcome, User};

/// Form-safe projection of a user; the password never leaves the server.
#[derive(ToSchema, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub email: String,
    pub name: String,
    pub last_name: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

#[derive(ToSchema, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    /// View to render: `login`, `admin/home` or `registration`.
    pub view: String,
    pub state: String,
    pub user: Option<UserView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    /// Field name to error messages.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, Vec<String>>,
    /// Informational banner, e.g. after a failed login or a logout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ViewModel {
    #[must_use]
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }
}

impl From<Outcome> for ViewModel {
    fn from(outcome: Outcome) -> Self {
        Self {
            view: outcome.view().name().to_string(),
            state: outcome.state().as_str().to_string(),
            user: outcome.user().map(UserView::from),
            success_message: outcome.success_message().map(str::to_string),
            errors: outcome
                .errors()
                .cloned()
                .map(|errors| errors.into_map())
                .unwrap_or_default(),
            message: None,
        }
    }
}

impl IntoResponse for ViewModel {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
