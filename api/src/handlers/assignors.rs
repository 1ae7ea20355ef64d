//! Assignor handlers
//!
//! Protected CRUD endpoints for assignors.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::{AssignorId, NewAssignor};
use crate::error::AppError;
use crate::handlers::presenters::AssignorHttp;
use crate::AppState;

/// Request body for editing an assignor
#[derive(Debug, Deserialize)]
pub struct EditAssignorRequest {
    pub document: String,
    pub email: String,
    pub phone: String,
    pub name: String,
}

/// GET /integrations/assignor/:id
pub async fn get_assignor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssignorHttp>, AppError> {
    let assignor = state
        .assignor_service
        .find_by_id(&AssignorId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Assignor {} not found", id)))?;

    Ok(Json(AssignorHttp::from(&assignor)))
}

/// PUT /integrations/assignor/:id
pub async fn edit_assignor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EditAssignorRequest>,
) -> Result<Json<AssignorHttp>, AppError> {
    let assignor = state
        .assignor_service
        .edit(
            &AssignorId(id),
            NewAssignor {
                document: request.document,
                email: request.email,
                phone: request.phone,
                name: request.name,
            },
        )
        .await?;

    Ok(Json(AssignorHttp::from(&assignor)))
}

/// DELETE /integrations/assignor/:id
pub async fn delete_assignor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.assignor_service.remove(&AssignorId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
