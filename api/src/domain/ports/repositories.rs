//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (PostgreSQL in production,
//! in-memory stores in tests).
//!
//! Contract notes:
//! - `find_*` lookups return `Ok(None)` when no entity matches.
//! - `update`/`delete` on an id with no matching row fail with
//!   `DomainError::NotFound` rather than silently succeeding.

use async_trait::async_trait;

use crate::domain::entities::{
    Assignor, AssignorId, Payable, PayableId, PayableWithAssignor, User, UserId,
};
use crate::error::DomainError;

/// Repository for Assignor entities
#[async_trait]
pub trait AssignorRepository: Send + Sync {
    /// Persist a new assignor
    async fn create(&self, assignor: &Assignor) -> Result<(), DomainError>;

    /// Replace the stored fields of an existing assignor
    async fn update(&self, assignor: &Assignor) -> Result<(), DomainError>;

    /// Remove an assignor
    async fn delete(&self, assignor: &Assignor) -> Result<(), DomainError>;

    /// Find an assignor by ID
    async fn find_by_id(&self, id: &AssignorId) -> Result<Option<Assignor>, DomainError>;

    /// Find an assignor by its document (the unique fiscal identifier)
    async fn find_by_document(&self, document: &str) -> Result<Option<Assignor>, DomainError>;
}

/// Repository for Payable entities
#[async_trait]
pub trait PayableRepository: Send + Sync {
    /// Persist a new payable
    async fn create(&self, payable: &Payable) -> Result<(), DomainError>;

    /// Replace the stored fields of an existing payable
    async fn update(&self, payable: &Payable) -> Result<(), DomainError>;

    /// Remove a payable
    async fn delete(&self, payable: &Payable) -> Result<(), DomainError>;

    /// Find a payable by ID
    async fn find_by_id(&self, id: &PayableId) -> Result<Option<Payable>, DomainError>;

    /// Find a payable joined with its assignor's public fields.
    ///
    /// Returns `Ok(None)` when the payable does not exist. A payable whose
    /// `assignor_id` references a missing assignor is a referential-integrity
    /// violation and fails with `DomainError::Internal`.
    async fn find_with_assignor_by_id(
        &self,
        id: &PayableId,
    ) -> Result<Option<PayableWithAssignor>, DomainError>;
}

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find a user by login
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, DomainError>;
}
