use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use pinauth_core::flow::{flow_error_to_status_code, FlowError};

use crate::response::ActionResponse;

/// Auth errors for the pinauth_auth crate.
///
/// This wraps the core `FlowError` and adds crate-specific variants for the
/// configuration and HTTP plumbing that can't live in the functional core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Error from the flow core (missing fields, unknown flow, storage).
    #[error(transparent)]
    Flow(#[from] FlowError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A computed header could not be encoded
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::Flow(FlowError::Storage(_)) => {
                tracing::error!("Flow storage error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
            AuthError::Flow(flow_err) => {
                let status = StatusCode::from_u16(flow_error_to_status_code(flow_err))
                    .unwrap_or(StatusCode::BAD_REQUEST);

                match flow_err.failure_code() {
                    Some(code) => (
                        status,
                        Json(ActionResponse::failed(code, flow_err.failure_description())),
                    )
                        .into_response(),
                    None => (status, flow_err.failure_description().to_string()).into_response(),
                }
            }
            AuthError::Config(_) | AuthError::InvalidHeader(_) => {
                tracing::error!("Auth error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server configuration error".to_string(),
                )
                    .into_response()
            }
        }
    }
}
