use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, Method};
use axum::middleware::Next;
use axum::response::Response;
use axum::Json;
use serde_json::{json, Map, Value};
use tracing::warn;

use models::Store;
use service::auth::TokenService;

use crate::errors::ApiError;

#[derive(Clone)]
pub struct ServerState {
    pub store: Store,
    pub tokens: Arc<TokenService>,
}

/// POST /jwt: sign whatever object the client submitted and hand the token
/// back. The payload is not validated; an `email` field is merely expected.
pub async fn issue_token(
    State(state): State<ServerState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<Value>, ApiError> {
    let token = state.tokens.issue(payload)?;
    Ok(Json(json!({ "token": token })))
}

/// Bearer-token guard, installed globally. Only the owner-scoped review
/// listing is enforced; every other route passes through untouched.
fn is_protected(req: &Request) -> bool {
    req.method() == Method::GET && req.uri().path() == "/reviews"
}

/// On the protected route: require `Authorization: Bearer <token>`, verify
/// it, and attach the decoded claims to request extensions. Any failure is
/// the same 401 and the downstream handler never runs.
pub async fn require_bearer(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !is_protected(&req) {
        return Ok(next.run(req).await);
    }

    let Some(header) = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    else {
        warn!("missing Authorization header on protected route");
        return Err(ApiError::Unauthorized);
    };

    let Some(token) = header.strip_prefix("Bearer ") else {
        warn!("Authorization header without Bearer scheme");
        return Err(ApiError::Unauthorized);
    };

    match state.tokens.verify(token.trim()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(error = %e, "bearer token rejected");
            Err(ApiError::Unauthorized)
        }
    }
}
