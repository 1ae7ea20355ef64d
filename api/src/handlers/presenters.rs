//! HTTP presenters
//!
//! Pure mappings from domain entities to their wire JSON shapes.
//! Identifiers are stringified; dates and numbers pass through unchanged.
//! The wire format is camelCase.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Assignor, AssignorSummary, Payable, PayableWithAssignor};

/// Wire shape of an assignor
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignorHttp {
    pub id: String,
    pub document: String,
    pub email: String,
    pub phone: String,
    pub name: String,
}

impl From<&Assignor> for AssignorHttp {
    fn from(assignor: &Assignor) -> Self {
        Self {
            id: assignor.id.to_string(),
            document: assignor.document.clone(),
            email: assignor.email.clone(),
            phone: assignor.phone.clone(),
            name: assignor.name.clone(),
        }
    }
}

impl From<&AssignorSummary> for AssignorHttp {
    fn from(summary: &AssignorSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            document: summary.document.clone(),
            email: summary.email.clone(),
            phone: summary.phone.clone(),
            name: summary.name.clone(),
        }
    }
}

/// Wire shape of a payable
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayableHttp {
    pub id: String,
    pub assignor_id: String,
    pub emission_date: NaiveDate,
    pub value: f64,
}

impl From<&Payable> for PayableHttp {
    fn from(payable: &Payable) -> Self {
        Self {
            id: payable.id.to_string(),
            assignor_id: payable.assignor_id.to_string(),
            emission_date: payable.emission_date,
            value: payable.value,
        }
    }
}

/// Wire shape of the payable-with-assignor projection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayableWithAssignorHttp {
    pub id: String,
    pub emission_date: NaiveDate,
    pub value: f64,
    pub assignor: AssignorHttp,
}

impl From<&PayableWithAssignor> for PayableWithAssignorHttp {
    fn from(projection: &PayableWithAssignor) -> Self {
        Self {
            id: projection.payable_id.to_string(),
            emission_date: projection.emission_date,
            value: projection.value,
            assignor: AssignorHttp::from(&projection.assignor),
        }
    }
}
