//! Application error type shared by every HTTP-facing crate.
//!
//! [`AppError`] pairs an HTTP status with an [`anyhow::Error`] and renders as
//! a `{"message": "..."}` JSON body. Authentication and authorization
//! failures always carry the same fixed messages so clients can match on
//! them.

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Body message for every 401 response.
pub const UNAUTHORIZED_MESSAGE: &str = "unauthorize access";

/// Body message for every 403 response.
pub const FORBIDDEN_MESSAGE: &str = "forbidden access";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    /// No token, malformed token, bad signature, or expired token.
    pub fn unauthorized() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow!(UNAUTHORIZED_MESSAGE))
    }

    /// Valid principal that failed an authorization policy.
    pub fn forbidden() -> Self {
        Self::new(StatusCode::FORBIDDEN, anyhow!(FORBIDDEN_MESSAGE))
    }

    /// The backing store could not answer. Never downgraded to allow/deny.
    pub fn store_unavailable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    /// The message clients see. Server-side causes stay in the logs.
    pub fn public_message(&self) -> String {
        if self.status.is_server_error() {
            self.status
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_lowercase()
        } else {
            self.error.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status.as_u16(),
                error = ?self.error,
                "request failed"
            );
        }

        let body = Json(json!({
            "message": self.public_message()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_has_fixed_message() {
        let err = AppError::unauthorized();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.public_message(), "unauthorize access");
    }

    #[test]
    fn test_forbidden_has_fixed_message() {
        let err = AppError::forbidden();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.public_message(), "forbidden access");
    }

    #[test]
    fn test_server_errors_hide_cause() {
        let err = AppError::store_unavailable(anyhow!("connection refused on 10.0.0.3"));
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.public_message(), "service unavailable");

        let err = AppError::internal(anyhow!("boom"));
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn test_client_errors_expose_cause() {
        let err = AppError::bad_request(anyhow!("invalid id"));
        assert_eq!(err.public_message(), "invalid id");
    }
}
