use std::borrow::Cow;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized: {0}")]
    Unauthorized(Cow<'static, str>),
    #[error("bad request: {0}")]
    BadRequest(Cow<'static, str>),
    #[error("internal error: {0}")]
    Internal(Cow<'static, str>),
}

impl AppError {
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Streaming clients only treat a non-2xx response as a complete
        // message when the body length is declared, so the zero length is
        // always spelled out instead of left to the transport.
        (
            status,
            [
                (header::CONTENT_LENGTH, "0"),
                (header::CONTENT_TYPE, "application/json"),
            ],
        )
            .into_response()
    }
}
