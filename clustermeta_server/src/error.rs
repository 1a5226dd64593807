use ::core::fmt::Display;

use ::axum::{
    response::{IntoResponse, Response},
    Json,
};
use ::clustermeta_common::error::{ClusterMetaError, ClusterMetaErrorType::*};
use ::http::StatusCode;
use ::serde::Serialize;

/// Body of every error response, and of the success response of the set operations.
#[derive(Debug, Serialize)]
pub(crate) struct MessageResponse {
    pub(crate) message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: String) -> Json<Self> {
        Json(Self { message })
    }
}

/// [ClusterMetaServerError] is a wrapper for [ClusterMetaError] to convert it into Axum response
#[derive(Debug)]
pub struct ClusterMetaServerError(ClusterMetaError);

impl ClusterMetaServerError {
    fn get_status_code(&self) -> StatusCode {
        match self.0.get_error_type() {
            MissingParameter => StatusCode::BAD_REQUEST,
            IllegalArgument => StatusCode::BAD_REQUEST,
            Unauthorized => StatusCode::UNAUTHORIZED,
            NotFound => StatusCode::NOT_FOUND,
            AlreadyExists => StatusCode::CONFLICT,
            FailToConnectDatabase => StatusCode::INTERNAL_SERVER_ERROR,
            FailToUpdateDatabase => StatusCode::INTERNAL_SERVER_ERROR,
            FailToReadDatabase => StatusCode::INTERNAL_SERVER_ERROR,
            FailToLoadConfig => StatusCode::INTERNAL_SERVER_ERROR,
            FailToStartServer => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ClusterMetaError> for ClusterMetaServerError {
    fn from(error: ClusterMetaError) -> Self {
        Self(error)
    }
}

/// [ClusterMetaServerError] displays in the same way as [ClusterMetaError]
impl Display for ClusterMetaServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Only the cause goes to the caller, the error type is carried by the status code.
impl IntoResponse for ClusterMetaServerError {
    fn into_response(self) -> Response {
        let status = self.get_status_code();
        let body = MessageResponse::new(self.0.get_cause().to_string());
        (status, body).into_response()
    }
}
