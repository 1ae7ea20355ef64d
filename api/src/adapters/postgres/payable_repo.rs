//! PostgreSQL adapter for PayableRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};

use crate::domain::entities::{Assignor, Payable, PayableId, PayableWithAssignor};
use crate::domain::ports::PayableRepository;
use crate::entity::{assignors, payables};
use crate::error::DomainError;

/// PostgreSQL implementation of PayableRepository
pub struct PostgresPayableRepository {
    db: DatabaseConnection,
}

impl PostgresPayableRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PayableRepository for PostgresPayableRepository {
    async fn create(&self, payable: &Payable) -> Result<(), DomainError> {
        let model = payables::ActiveModel {
            id: Set(payable.id.0),
            assignor_id: Set(payable.assignor_id.0),
            emission_date: Set(payable.emission_date),
            value: Set(payable.value),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, payable: &Payable) -> Result<(), DomainError> {
        payables::ActiveModel {
            id: Set(payable.id.0),
            assignor_id: Set(payable.assignor_id.0),
            emission_date: Set(payable.emission_date),
            value: Set(payable.value),
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Payable {} not found", payable.id))
            }
            e => DomainError::Database(e.to_string()),
        })?;

        Ok(())
    }

    async fn delete(&self, payable: &Payable) -> Result<(), DomainError> {
        let result = payables::Entity::delete_by_id(payable.id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Payable {} not found",
                payable.id
            )));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &PayableId) -> Result<Option<Payable>, DomainError> {
        let result = payables::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_with_assignor_by_id(
        &self,
        id: &PayableId,
    ) -> Result<Option<PayableWithAssignor>, DomainError> {
        let payable = match payables::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        {
            Some(model) => Payable::from(model),
            None => return Ok(None),
        };

        let assignor = assignors::Entity::find_by_id(payable.assignor_id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
            .map(Assignor::from)
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "Payable {} references missing assignor {}",
                    payable.id, payable.assignor_id
                ))
            })?;

        Ok(Some(PayableWithAssignor::from_parts(&payable, &assignor)))
    }
}

/// Convert SeaORM model to domain entity
impl From<payables::Model> for Payable {
    fn from(model: payables::Model) -> Self {
        Payable {
            id: PayableId(model.id),
            assignor_id: model.assignor_id.into(),
            emission_date: model.emission_date,
            value: model.value,
        }
    }
}
