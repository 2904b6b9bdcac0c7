use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use mongodb::bson::Document;
use serde::Deserialize;

use models::ack::{DeleteAck, InsertAck, UpdateAck};
use service::auth::Claims;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessagePatch {
    pub message: String,
}

pub async fn create(
    State(state): State<ServerState>,
    Json(document): Json<Document>,
) -> Result<Json<InsertAck>, ApiError> {
    Ok(Json(models::review::insert(&state.store, document).await?))
}

/// GET /reviews (guarded): all reviews, or one owner's when `?email=` is
/// given. The email must match the token's claim; a mismatch is a 401 and
/// the query never runs.
pub async fn list(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Document>>, ApiError> {
    if let Some(email) = params.email.as_deref() {
        if claims.email.as_deref() != Some(email) {
            return Err(ApiError::Unauthorized);
        }
    }
    Ok(Json(models::review::list(&state.store, params.email.as_deref()).await?))
}

/// GET /reviews/:id: reviews whose `service` field references the id.
pub async fn list_for_service(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(models::review::list_for_service(&state.store, &id).await?))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, ApiError> {
    Ok(Json(models::review::find_by_id(&state.store, &id).await?))
}

pub async fn delete_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    Ok(Json(models::review::delete_by_id(&state.store, &id).await?))
}

/// PUT /review/:id: set the `message` field, upserting on a miss.
pub async fn update_message(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(patch): Json<MessagePatch>,
) -> Result<Json<UpdateAck>, ApiError> {
    Ok(Json(models::review::set_message(&state.store, &id, &patch.message).await?))
}
