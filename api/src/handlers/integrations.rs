//! Integration handlers
//!
//! The public combined entry point that receives a payable together with the
//! assignor it belongs to.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewAssignor, NewPayable};
use crate::error::{AppError, DomainError};
use crate::handlers::presenters::{AssignorHttp, PayableHttp};
use crate::AppState;

/// Request body for the combined create flow
#[derive(Debug, Deserialize)]
pub struct ReceivePayableAndAssignorRequest {
    pub payable: PayablePayload,
    pub assignor: AssignorPayload,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayablePayload {
    pub value: f64,
    pub emission_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct AssignorPayload {
    pub document: String,
    pub email: String,
    pub phone: String,
    pub name: String,
}

/// Response body carrying both created records
#[derive(Debug, Serialize)]
pub struct ReceivePayableAndAssignorResponse {
    pub payable: PayableHttp,
    pub assignor: AssignorHttp,
}

/// POST /integrations/payable
///
/// Creates the assignor first, then the payable referencing it. An assignor
/// business failure aborts the flow with a 400 before the payable is ever
/// written; the two writes are sequential, not transactional.
pub async fn receive_payable_and_assignor(
    State(state): State<AppState>,
    Json(request): Json<ReceivePayableAndAssignorRequest>,
) -> Result<Json<ReceivePayableAndAssignorResponse>, AppError> {
    let assignor = state
        .assignor_service
        .create(NewAssignor {
            document: request.assignor.document,
            email: request.assignor.email,
            phone: request.assignor.phone,
            name: request.assignor.name,
        })
        .await
        .map_err(|e| match e {
            // Business failures abort the flow as a 400 carrying the message;
            // infrastructure faults keep their 500 mapping.
            e @ (DomainError::Database(_) | DomainError::Internal(_)) => AppError::Domain(e),
            e => AppError::BadRequest(e.to_string()),
        })?;

    let payable = state
        .payable_service
        .create(NewPayable {
            assignor_id: assignor.id,
            emission_date: request.payable.emission_date,
            value: request.payable.value,
        })
        .await?;

    Ok(Json(ReceivePayableAndAssignorResponse {
        payable: PayableHttp::from(&payable),
        assignor: AssignorHttp::from(&assignor),
    }))
}
