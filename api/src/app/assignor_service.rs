//! Assignor service
//!
//! Create, edit, remove and find use cases for assignors.

use std::sync::Arc;

use crate::domain::entities::{Assignor, AssignorId, NewAssignor};
use crate::domain::ports::AssignorRepository;
use crate::error::DomainError;

/// Service for managing assignors
pub struct AssignorService<AR>
where
    AR: AssignorRepository,
{
    assignors: Arc<AR>,
}

impl<AR> AssignorService<AR>
where
    AR: AssignorRepository,
{
    pub fn new(assignors: Arc<AR>) -> Self {
        Self { assignors }
    }

    /// Create a new assignor with a freshly generated identifier.
    ///
    /// Fails with `Validation` on field-constraint violations and with
    /// `AlreadyExists` when another assignor carries the same document.
    pub async fn create(&self, input: NewAssignor) -> Result<Assignor, DomainError> {
        input.validate()?;

        if self
            .assignors
            .find_by_document(&input.document)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyExists(format!(
                "Assignor with document '{}' already exists",
                input.document
            )));
        }

        let assignor = Assignor {
            id: AssignorId::new(),
            document: input.document,
            email: input.email,
            phone: input.phone,
            name: input.name,
        };

        self.assignors.create(&assignor).await?;

        Ok(assignor)
    }

    /// Replace the mutable fields of an existing assignor
    pub async fn edit(
        &self,
        id: &AssignorId,
        input: NewAssignor,
    ) -> Result<Assignor, DomainError> {
        input.validate()?;

        let mut assignor = self
            .assignors
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Assignor {} not found", id)))?;

        if input.document != assignor.document
            && self
                .assignors
                .find_by_document(&input.document)
                .await?
                .is_some()
        {
            return Err(DomainError::AlreadyExists(format!(
                "Assignor with document '{}' already exists",
                input.document
            )));
        }

        assignor.document = input.document;
        assignor.email = input.email;
        assignor.phone = input.phone;
        assignor.name = input.name;

        self.assignors.update(&assignor).await?;

        Ok(assignor)
    }

    /// Remove an assignor
    pub async fn remove(&self, id: &AssignorId) -> Result<(), DomainError> {
        let assignor = self
            .assignors
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Assignor {} not found", id)))?;

        self.assignors.delete(&assignor).await
    }

    /// Find an assignor by ID
    pub async fn find_by_id(&self, id: &AssignorId) -> Result<Option<Assignor>, DomainError> {
        self.assignors.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_assignor, test_assignor_input, InMemoryAssignorRepository};

    fn create_service(repo: InMemoryAssignorRepository) -> AssignorService<InMemoryAssignorRepository> {
        AssignorService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn create_success() {
        let service = create_service(InMemoryAssignorRepository::new());

        let assignor = service.create(test_assignor_input()).await.unwrap();

        assert_eq!(assignor.document, "12345678900");
        assert_eq!(assignor.name, "Alice");
        let found = service.find_by_id(&assignor.id).await.unwrap().unwrap();
        assert_eq!(found.email, assignor.email);
    }

    #[tokio::test]
    async fn create_fails_with_duplicate_document() {
        let existing = test_assignor();
        let service =
            create_service(InMemoryAssignorRepository::new().with_assignor(existing.clone()));

        let mut input = test_assignor_input();
        input.document = existing.document.clone();

        let result = service.create(input).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn create_fails_with_overlong_document() {
        let service = create_service(InMemoryAssignorRepository::new());

        let mut input = test_assignor_input();
        input.document = "9".repeat(31);

        let result = service.create(input).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn edit_updates_fields() {
        let existing = test_assignor();
        let service =
            create_service(InMemoryAssignorRepository::new().with_assignor(existing.clone()));

        let mut input = test_assignor_input();
        input.document = existing.document.clone();
        input.name = "Bob".to_string();

        let updated = service.edit(&existing.id, input).await.unwrap();

        assert_eq!(updated.id, existing.id);
        assert_eq!(updated.name, "Bob");
        let found = service.find_by_id(&existing.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Bob");
    }

    #[tokio::test]
    async fn edit_fails_for_unknown_id() {
        let service = create_service(InMemoryAssignorRepository::new());

        let result = service
            .edit(&AssignorId::new(), test_assignor_input())
            .await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn edit_rejects_document_already_taken() {
        let first = test_assignor();
        let mut second = test_assignor();
        second.document = "98765432100".to_string();

        let service = create_service(
            InMemoryAssignorRepository::new()
                .with_assignor(first.clone())
                .with_assignor(second.clone()),
        );

        let mut input = test_assignor_input();
        input.document = first.document.clone();

        let result = service.edit(&second.id, input).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn remove_deletes_the_assignor() {
        let existing = test_assignor();
        let service =
            create_service(InMemoryAssignorRepository::new().with_assignor(existing.clone()));

        service.remove(&existing.id).await.unwrap();

        assert!(service.find_by_id(&existing.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remove_fails_for_unknown_id() {
        let service = create_service(InMemoryAssignorRepository::new());

        let result = service.remove(&AssignorId::new()).await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_unknown_id() {
        let service = create_service(InMemoryAssignorRepository::new());

        let found = service.find_by_id(&AssignorId::new()).await.unwrap();

        assert!(found.is_none());
    }
}
