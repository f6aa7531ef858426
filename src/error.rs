//! Error types for hrms

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid employee id: {0}")]
    InvalidId(String),

    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl Error {
    pub fn connection(msg: impl Into<String>) -> Self {
        Error::Connection(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    /// HTTP status a handler answers with for this error.
    ///
    /// A malformed id is reported the same way as a missing one.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidId(_) | Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<mongodb::error::Error> for Error {
    fn from(err: mongodb::error::Error) -> Self {
        Error::Store(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            Error::InvalidId("zz".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::not_found("abc").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::InvalidBody("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::store("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_text_is_exposed() {
        let err = Error::store("server selection timeout");
        assert_eq!(err.to_string(), "Store error: server selection timeout");
    }
}
