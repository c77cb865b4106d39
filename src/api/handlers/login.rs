//! Login page, credential login and logout.

use axum::{
    Form,
    extract::{Extension, Query},
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use utoipa::{IntoParams, ToSchema};

use super::{
    session::{authenticate, clear_session_cookie, extract_session_token, session_cookie},
    state::AppState,
    view::ViewModel,
};
use crate::account::{Outcome, normalize_email};
use crate::store::verify_login;

pub const LOGIN_ERROR_MESSAGE: &str = "Invalid email and/or password";
pub const LOGOUT_MESSAGE: &str = "You have been logged out";

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginQuery {
    /// Set after a failed login attempt.
    error: Option<String>,
    /// Set after logging out.
    logout: Option<String>,
}

#[derive(ToSchema, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[utoipa::path(
    get,
    path = "/login",
    params(LoginQuery),
    responses(
        (status = 200, description = "Login view for anonymous callers, home view otherwise", body = ViewModel),
    ),
    tag = "account"
)]
pub async fn login_page(
    headers: HeaderMap,
    Query(query): Query<LoginQuery>,
    state: Extension<Arc<AppState>>,
) -> Response {
    let auth = match authenticate(&headers, state.sessions()).await {
        Ok(auth) => auth,
        Err(err) => {
            error!("Failed to resolve session: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match state.workflow().present_login_or_home(&auth).await {
        Ok(outcome) => {
            let showing_login = matches!(outcome, Outcome::Login { .. });
            let view = ViewModel::from(outcome);
            let view = match (&query.error, &query.logout) {
                (Some(_), _) if showing_login => view.with_message(LOGIN_ERROR_MESSAGE),
                (None, Some(_)) if showing_login => view.with_message(LOGOUT_MESSAGE),
                _ => view,
            };
            view.into_response()
        }
        Err(err) => {
            error!("Failed to present login: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Redirect to /admin/home with a session cookie, or back to /login?error=true"),
        (status = 500, description = "Identity or session store failure"),
    ),
    tag = "account"
)]
#[instrument(skip(state))]
pub async fn login(state: Extension<Arc<AppState>>, Form(form): Form<LoginForm>) -> Response {
    let email = normalize_email(&form.email);

    let user = match state.identities().find_by_email(&email).await {
        Ok(user) => user,
        Err(err) => {
            error!("Error looking up user: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    // Unknown emails still pay for a hash check.
    let verified = verify_login(
        &form.password,
        user.as_ref().map(|user| user.password.expose_secret()),
    );
    let authenticated = verified && user.as_ref().is_some_and(|user| user.active);

    if !authenticated {
        debug!("Unauthorized");
        return Redirect::to("/login?error=true").into_response();
    }

    let config = state.session_config();
    let token = match state
        .sessions()
        .create_session(&email, config.ttl_seconds())
        .await
    {
        Ok(token) => token,
        Err(err) => {
            error!("Failed to create session: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match session_cookie(config, &token) {
        Ok(cookie) => {
            info!("Login successful");
            ([(SET_COOKIE, cookie)], Redirect::to("/admin/home")).into_response()
        }
        Err(err) => {
            error!("Failed to build session cookie: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 303, description = "Session cleared, redirect to /login?logout=true"),
    ),
    tag = "account"
)]
pub async fn logout(headers: HeaderMap, state: Extension<Arc<AppState>>) -> Response {
    if let Some(token) = extract_session_token(&headers) {
        if let Err(err) = state.sessions().delete_session(&token).await {
            error!("Failed to delete session: {err}");
        }
    }

    // Always clear the cookie, even if the session record was missing.
    let mut response = Redirect::to("/login?logout=true").into_response();
    if let Ok(cookie) = clear_session_cookie(state.session_config()) {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    response
}
