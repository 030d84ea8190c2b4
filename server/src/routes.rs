use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::AppState;

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .route("/auth", get(auth))
        .route("/bad", get(bad))
        .route("/error", get(error))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn auth(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, AppError> {
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    if presented != state.config.auth_token {
        return Err(AppError::unauthorized("Authorization mismatch"));
    }

    Ok((
        [(header::CONTENT_TYPE, "application/json")],
        presented.to_string(),
    )
        .into_response())
}

async fn bad() -> Result<Response, AppError> {
    Err(AppError::bad_request("Bad request fixture"))
}

async fn error() -> Result<Response, AppError> {
    Err(AppError::internal("Server error fixture"))
}
