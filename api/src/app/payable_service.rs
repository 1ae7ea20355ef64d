//! Payable service
//!
//! Create, edit, remove and find use cases for payables, including the
//! joined read with the owning assignor.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::entities::{NewPayable, Payable, PayableId, PayableWithAssignor};
use crate::domain::ports::{AssignorRepository, PayableRepository};
use crate::error::DomainError;

/// Service for managing payables
pub struct PayableService<PR, AR>
where
    PR: PayableRepository,
    AR: AssignorRepository,
{
    payables: Arc<PR>,
    assignors: Arc<AR>,
}

impl<PR, AR> PayableService<PR, AR>
where
    PR: PayableRepository,
    AR: AssignorRepository,
{
    pub fn new(payables: Arc<PR>, assignors: Arc<AR>) -> Self {
        Self {
            payables,
            assignors,
        }
    }

    /// Create a new payable with a freshly generated identifier.
    ///
    /// The referenced assignor must exist at creation time.
    pub async fn create(&self, input: NewPayable) -> Result<Payable, DomainError> {
        input.validate()?;

        if self
            .assignors
            .find_by_id(&input.assignor_id)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation(format!(
                "Referenced assignor {} does not exist",
                input.assignor_id
            )));
        }

        let payable = Payable {
            id: PayableId::new(),
            assignor_id: input.assignor_id,
            emission_date: input.emission_date,
            value: input.value,
        };

        self.payables.create(&payable).await?;

        Ok(payable)
    }

    /// Update a payable's value and emission date.
    ///
    /// The assignor link is immutable; re-pointing a payable at a different
    /// assignor is not an operation this surface offers.
    pub async fn edit(
        &self,
        id: &PayableId,
        emission_date: NaiveDate,
        value: f64,
    ) -> Result<Payable, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::Validation(
                "value must be a finite number".to_string(),
            ));
        }

        let mut payable = self
            .payables
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Payable {} not found", id)))?;

        payable.emission_date = emission_date;
        payable.value = value;

        self.payables.update(&payable).await?;

        Ok(payable)
    }

    /// Remove a payable
    pub async fn remove(&self, id: &PayableId) -> Result<(), DomainError> {
        let payable = self
            .payables
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Payable {} not found", id)))?;

        self.payables.delete(&payable).await
    }

    /// Find a payable by ID
    pub async fn find_by_id(&self, id: &PayableId) -> Result<Option<Payable>, DomainError> {
        self.payables.find_by_id(id).await
    }

    /// Find a payable joined with its assignor's public fields
    pub async fn find_with_assignor(
        &self,
        id: &PayableId,
    ) -> Result<Option<PayableWithAssignor>, DomainError> {
        self.payables.find_with_assignor_by_id(id).await
    }
}
