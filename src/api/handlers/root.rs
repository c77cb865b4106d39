use axum::response::Redirect;

// axum handler for /
pub async fn root() -> Redirect {
    Redirect::to("/login")
}
