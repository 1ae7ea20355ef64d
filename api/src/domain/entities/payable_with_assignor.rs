//! Read-side projection of a payable joined with its assignor
//!
//! Built on demand by the repository join read; never persisted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Assignor, AssignorId, Payable, PayableId};

/// The assignor's public fields as carried by the projection
#[derive(Debug, Clone, Serialize)]
pub struct AssignorSummary {
    pub id: AssignorId,
    pub document: String,
    pub email: String,
    pub name: String,
    pub phone: String,
}

impl From<&Assignor> for AssignorSummary {
    fn from(assignor: &Assignor) -> Self {
        Self {
            id: assignor.id,
            document: assignor.document.clone(),
            email: assignor.email.clone(),
            name: assignor.name.clone(),
            phone: assignor.phone.clone(),
        }
    }
}

/// A payable together with its owning assignor's public fields
#[derive(Debug, Clone, Serialize)]
pub struct PayableWithAssignor {
    pub payable_id: PayableId,
    pub emission_date: NaiveDate,
    pub value: f64,
    pub assignor: AssignorSummary,
}

impl PayableWithAssignor {
    /// Build the projection from a payable and the assignor it references.
    ///
    /// Callers are responsible for the referential-integrity check; this is a
    /// pure mapping.
    pub fn from_parts(payable: &Payable, assignor: &Assignor) -> Self {
        Self {
            payable_id: payable.id,
            emission_date: payable.emission_date,
            value: payable.value,
            assignor: AssignorSummary::from(assignor),
        }
    }
}
