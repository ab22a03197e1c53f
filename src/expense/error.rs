//! Defines the errors reported to API clients and how they are rendered.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that an expense endpoint may respond with.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ExpenseError {
    /// The request body could not be decoded or failed validation.
    ///
    /// The string describes what was wrong with the body.
    #[error("{0}")]
    InvalidRequest(String),

    /// The requested expense does not exist.
    #[error("expense not found")]
    NotFound,

    /// Something went wrong on the server.
    ///
    /// The cause is logged on the server and not shown to the client.
    #[error("internal server error")]
    InternalError,
}

impl ExpenseError {
    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ExpenseError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ExpenseError::NotFound => StatusCode::NOT_FOUND,
            ExpenseError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The JSON body sent with every error response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorMessage {
    /// A human readable description of the error.
    pub message: String,
}

impl ErrorMessage {
    /// Create an error body with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ExpenseError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorMessage::new(self.to_string()))).into_response()
    }
}
