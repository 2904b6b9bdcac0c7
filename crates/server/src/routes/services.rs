use axum::extract::{Path, State};
use axum::Json;
use mongodb::bson::Document;

use models::ack::InsertAck;

use crate::errors::ApiError;
use crate::routes::ServerState;

const RECENT_LIMIT: i64 = 3;

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(models::service::list_all(&state.store).await?))
}

/// GET /limitedServices: the three most recent services.
pub async fn list_recent(State(state): State<ServerState>) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(models::service::list_recent(&state.store, RECENT_LIMIT).await?))
}

/// GET /services/:id: the document, or `null` when nothing matches.
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, ApiError> {
    Ok(Json(models::service::find_by_id(&state.store, &id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(document): Json<Document>,
) -> Result<Json<InsertAck>, ApiError> {
    Ok(Json(models::service::insert(&state.store, document).await?))
}
