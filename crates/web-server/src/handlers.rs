use crate::extract::{JsonBody, RecordId};
use crate::{error::AppError, AppState};
use axum::{extract::State, http::StatusCode, Json};
use core_types::{NewRecord, Resource};
use serde::Serialize;
use std::sync::Arc;

pub const WELCOME: &str = "Welcome to my application!";

/// The body of every successful write.
#[derive(Debug, Serialize)]
pub struct Confirmation {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

/// # GET /
pub async fn home() -> &'static str {
    WELCOME
}

/// # GET /{resource}
/// Every row of the resource's table, as a JSON array. Empty tables give `[]`.
pub async fn list_all<R: Resource>(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<R>>, AppError> {
    let records = state.repositories.for_kind(R::KIND).list_all().await?;
    Ok(Json(records.into_iter().map(R::from).collect()))
}

/// # POST /{resource}/add
pub async fn insert<R: Resource>(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<R::Payload>,
) -> Result<(StatusCode, Json<Confirmation>), AppError> {
    let new: NewRecord = payload.into();
    let id = state.repositories.for_kind(R::KIND).insert(&new).await?;
    tracing::info!(resource = %R::KIND, id, "Record created.");

    Ok((
        StatusCode::CREATED,
        Json(Confirmation {
            message: format!("{} created successfully", R::KIND.label()),
            id: Some(id),
        }),
    ))
}

/// # DELETE /{resource}/:id
/// Reports success even when no row had that id.
pub async fn delete_by_id<R: Resource>(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
) -> Result<Json<Confirmation>, AppError> {
    let affected = state.repositories.for_kind(R::KIND).delete_by_id(id).await?;
    tracing::info!(resource = %R::KIND, id, affected, "Delete handled.");

    Ok(Json(Confirmation {
        message: format!("{} deleted successfully", R::KIND.label()),
        id: None,
    }))
}
