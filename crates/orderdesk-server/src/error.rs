use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orderdesk_core::error::OrderdeskError;

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
///
/// Clients get the status line's reason phrase as a plain-text body
/// (`Not Found`, `Bad Request`); the detailed message only goes to the log.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<OrderdeskError>() {
            Some(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Some(OrderdeskError::MissingParameter(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {:#}", self.0);
        } else {
            tracing::debug!(status = status.as_u16(), "{}", self.0);
        }
        let body = status.canonical_reason().unwrap_or("Error");
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
