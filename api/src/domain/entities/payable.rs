//! Payable domain entity
//!
//! A payable is a receivable/invoice record that references its assignor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::AssignorId;
use crate::error::DomainError;

/// Unique identifier for a payable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayableId(pub Uuid);

impl PayableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PayableId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for PayableId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PayableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A receivable owed to an assignor
#[derive(Debug, Clone, Serialize)]
pub struct Payable {
    pub id: PayableId,
    /// Owning assignor; a weak reference, the assignor is a separate aggregate
    pub assignor_id: AssignorId,
    pub emission_date: NaiveDate,
    pub value: f64,
}

/// Data needed to create a new payable
#[derive(Debug, Clone)]
pub struct NewPayable {
    pub assignor_id: AssignorId,
    pub emission_date: NaiveDate,
    pub value: f64,
}

impl NewPayable {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.value.is_finite() {
            return Err(DomainError::Validation(
                "value must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}
