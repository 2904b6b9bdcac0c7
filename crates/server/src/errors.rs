use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use models::StoreError;
use service::auth::AuthError;

/// Request-level error taxonomy. Authentication failures short-circuit with
/// the exact reference body; store faults become structured 5xx responses
/// instead of hung connections.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized access")]
    Unauthorized,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => unauthorized(),
            ApiError::Store(StoreError::InvalidId(id)) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": format!("invalid document id: {id}") })),
            )
                .into_response(),
            ApiError::Store(StoreError::Driver(e)) => {
                error!(error = %e, "store operation failed");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(serde_json::json!({ "error": "upstream store failure" })),
                )
                    .into_response()
            }
            ApiError::Auth(AuthError::Signing(e)) => {
                error!(error = %e, "token signing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({ "error": "token signing failed" })),
                )
                    .into_response()
            }
            // Verification failures reaching here collapse to the same 401.
            ApiError::Auth(_) => unauthorized(),
        }
    }
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "message": "unauthorized access" })),
    )
        .into_response()
}
