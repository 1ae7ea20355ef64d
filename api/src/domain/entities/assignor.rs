//! Assignor domain entity
//!
//! The assignor is the party who is owed money in a receivable.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Field limits of the assignor wire schema
pub const MAX_DOCUMENT_LEN: usize = 30;
pub const MAX_EMAIL_LEN: usize = 140;
pub const MAX_PHONE_LEN: usize = 20;
pub const MAX_NAME_LEN: usize = 140;

/// Unique identifier for an assignor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssignorId(pub Uuid);

impl AssignorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssignorId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AssignorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AssignorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The party who is owed money in a receivable
#[derive(Debug, Clone, Serialize)]
pub struct Assignor {
    pub id: AssignorId,
    pub document: String,
    pub email: String,
    pub phone: String,
    pub name: String,
}

/// Data needed to create or edit an assignor
#[derive(Debug, Clone)]
pub struct NewAssignor {
    pub document: String,
    pub email: String,
    pub phone: String,
    pub name: String,
}

impl NewAssignor {
    /// Check the field constraints of the assignor schema.
    ///
    /// All violations are collected into a single message so a rejected
    /// request reports every offending field at once.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut violations = Vec::new();

        check_length(&mut violations, "document", &self.document, MAX_DOCUMENT_LEN);
        check_length(&mut violations, "email", &self.email, MAX_EMAIL_LEN);
        check_length(&mut violations, "phone", &self.phone, MAX_PHONE_LEN);
        check_length(&mut violations, "name", &self.name, MAX_NAME_LEN);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(violations.join("; ")))
        }
    }
}

fn check_length(violations: &mut Vec<String>, field: &str, value: &str, max: usize) {
    if value.is_empty() || value.len() > max {
        violations.push(format!("{} must be between 1 and {} characters", field, max));
    }
}
