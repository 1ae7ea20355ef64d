//! In-memory implementations of the repository ports
//!
//! These store data in memory behind an RwLock and follow the same contract
//! as the PostgreSQL adapters: `find_*` returns `Ok(None)` on a miss,
//! `update`/`delete` fail with `NotFound` for absent ids.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Assignor, AssignorId, Payable, PayableId, PayableWithAssignor, User, UserId,
};
use crate::domain::ports::{AssignorRepository, PayableRepository, UserRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Assignor Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAssignorRepository {
    assignors: Arc<RwLock<HashMap<AssignorId, Assignor>>>,
}

impl InMemoryAssignorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an assignor for testing
    pub fn with_assignor(self, assignor: Assignor) -> Self {
        self.assignors
            .write()
            .unwrap()
            .insert(assignor.id, assignor);
        self
    }
}

#[async_trait]
impl AssignorRepository for InMemoryAssignorRepository {
    async fn create(&self, assignor: &Assignor) -> Result<(), DomainError> {
        self.assignors
            .write()
            .unwrap()
            .insert(assignor.id, assignor.clone());
        Ok(())
    }

    async fn update(&self, assignor: &Assignor) -> Result<(), DomainError> {
        let mut assignors = self.assignors.write().unwrap();
        if !assignors.contains_key(&assignor.id) {
            return Err(DomainError::NotFound(format!(
                "Assignor {} not found",
                assignor.id
            )));
        }
        assignors.insert(assignor.id, assignor.clone());
        Ok(())
    }

    async fn delete(&self, assignor: &Assignor) -> Result<(), DomainError> {
        let mut assignors = self.assignors.write().unwrap();
        if assignors.remove(&assignor.id).is_none() {
            return Err(DomainError::NotFound(format!(
                "Assignor {} not found",
                assignor.id
            )));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &AssignorId) -> Result<Option<Assignor>, DomainError> {
        let assignors = self.assignors.read().unwrap();
        Ok(assignors.get(id).cloned())
    }

    async fn find_by_document(&self, document: &str) -> Result<Option<Assignor>, DomainError> {
        let assignors = self.assignors.read().unwrap();
        Ok(assignors
            .values()
            .find(|a| a.document == document)
            .cloned())
    }
}

// ============================================================================
// In-Memory Payable Repository
// ============================================================================

/// In-memory payable store.
///
/// Holds a reference to the assignor repository so the joined read can
/// resolve the owning assignor, the same shape the PostgreSQL adapter gets
/// from its second query.
pub struct InMemoryPayableRepository {
    payables: Arc<RwLock<HashMap<PayableId, Payable>>>,
    assignors: Arc<InMemoryAssignorRepository>,
}

impl InMemoryPayableRepository {
    pub fn new(assignors: Arc<InMemoryAssignorRepository>) -> Self {
        Self {
            payables: Arc::new(RwLock::new(HashMap::new())),
            assignors,
        }
    }

    /// Number of stored payables
    pub fn count(&self) -> usize {
        self.payables.read().unwrap().len()
    }
}

#[async_trait]
impl PayableRepository for InMemoryPayableRepository {
    async fn create(&self, payable: &Payable) -> Result<(), DomainError> {
        self.payables
            .write()
            .unwrap()
            .insert(payable.id, payable.clone());
        Ok(())
    }

    async fn update(&self, payable: &Payable) -> Result<(), DomainError> {
        let mut payables = self.payables.write().unwrap();
        if !payables.contains_key(&payable.id) {
            return Err(DomainError::NotFound(format!(
                "Payable {} not found",
                payable.id
            )));
        }
        payables.insert(payable.id, payable.clone());
        Ok(())
    }

    async fn delete(&self, payable: &Payable) -> Result<(), DomainError> {
        let mut payables = self.payables.write().unwrap();
        if payables.remove(&payable.id).is_none() {
            return Err(DomainError::NotFound(format!(
                "Payable {} not found",
                payable.id
            )));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &PayableId) -> Result<Option<Payable>, DomainError> {
        let payables = self.payables.read().unwrap();
        Ok(payables.get(id).cloned())
    }

    async fn find_with_assignor_by_id(
        &self,
        id: &PayableId,
    ) -> Result<Option<PayableWithAssignor>, DomainError> {
        let payable = match self.find_by_id(id).await? {
            Some(payable) => payable,
            None => return Ok(None),
        };

        let assignor = self
            .assignors
            .find_by_id(&payable.assignor_id)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "Payable {} references missing assignor {}",
                    payable.id, payable.assignor_id
                ))
            })?;

        Ok(Some(PayableWithAssignor::from_parts(&payable, &assignor)))
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().insert(user.id, user);
        self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), DomainError> {
        self.users.write().unwrap().insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().unwrap();
        Ok(users.values().find(|u| u.login == login).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_assignor, test_payable};

    #[tokio::test]
    async fn update_absent_assignor_leaves_state_untouched() {
        let repo = InMemoryAssignorRepository::new();
        let ghost = test_assignor();

        let result = repo.update(&ghost).await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert!(repo.find_by_id(&ghost.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_absent_payable_fails() {
        let assignors = Arc::new(InMemoryAssignorRepository::new());
        let repo = InMemoryPayableRepository::new(assignors);
        let ghost = test_payable(crate::domain::entities::AssignorId::new());

        let result = repo.delete(&ghost).await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert_eq!(repo.count(), 0);
    }
}
