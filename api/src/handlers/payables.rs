//! Payable handlers
//!
//! Protected CRUD endpoints for payables, plus the joined read with the
//! owning assignor.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::entities::PayableId;
use crate::error::AppError;
use crate::handlers::presenters::{PayableHttp, PayableWithAssignorHttp};
use crate::AppState;

/// Request body for editing a payable
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPayableRequest {
    pub value: f64,
    pub emission_date: NaiveDate,
}

/// GET /integrations/payable/:id
pub async fn get_payable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PayableHttp>, AppError> {
    let payable = state
        .payable_service
        .find_by_id(&PayableId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Payable {} not found", id)))?;

    Ok(Json(PayableHttp::from(&payable)))
}

/// GET /integrations/payable/:id/assignor
///
/// The payable joined with its assignor's public fields.
pub async fn get_payable_with_assignor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PayableWithAssignorHttp>, AppError> {
    let projection = state
        .payable_service
        .find_with_assignor(&PayableId(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Payable {} not found", id)))?;

    Ok(Json(PayableWithAssignorHttp::from(&projection)))
}

/// PUT /integrations/payable/:id
pub async fn edit_payable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EditPayableRequest>,
) -> Result<Json<PayableHttp>, AppError> {
    let payable = state
        .payable_service
        .edit(&PayableId(id), request.emission_date, request.value)
        .await?;

    Ok(Json(PayableHttp::from(&payable)))
}

/// DELETE /integrations/payable/:id
pub async fn delete_payable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.payable_service.remove(&PayableId(id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
