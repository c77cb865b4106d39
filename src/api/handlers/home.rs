use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::{debug, error};

use super::{session::authenticate, state::AppState, view::ViewModel};

#[utoipa::path(
    get,
    path = "/admin/home",
    responses(
        (status = 200, description = "Home view with the signed-in user", body = ViewModel),
        (status = 303, description = "Anonymous caller, redirect to /login"),
    ),
    tag = "account"
)]
pub async fn home(headers: HeaderMap, state: Extension<Arc<AppState>>) -> Response {
    let auth = match authenticate(&headers, state.sessions()).await {
        Ok(auth) => auth,
        Err(err) => {
            error!("Failed to resolve session: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if !auth.is_authenticated() {
        debug!("Anonymous request to /admin/home");
        return Redirect::to("/login").into_response();
    }

    match state.workflow().present_login_or_home(&auth).await {
        Ok(outcome) => ViewModel::from(outcome).into_response(),
        Err(err) => {
            error!("Failed to present home: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
