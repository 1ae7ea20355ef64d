//! PostgreSQL adapter for AssignorRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::domain::entities::{Assignor, AssignorId};
use crate::domain::ports::AssignorRepository;
use crate::entity::assignors;
use crate::error::DomainError;

/// PostgreSQL implementation of AssignorRepository
pub struct PostgresAssignorRepository {
    db: DatabaseConnection,
}

impl PostgresAssignorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AssignorRepository for PostgresAssignorRepository {
    async fn create(&self, assignor: &Assignor) -> Result<(), DomainError> {
        let model = assignors::ActiveModel {
            id: Set(assignor.id.0),
            document: Set(assignor.document.clone()),
            email: Set(assignor.email.clone()),
            phone: Set(assignor.phone.clone()),
            name: Set(assignor.name.clone()),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn update(&self, assignor: &Assignor) -> Result<(), DomainError> {
        assignors::ActiveModel {
            id: Set(assignor.id.0),
            document: Set(assignor.document.clone()),
            email: Set(assignor.email.clone()),
            phone: Set(assignor.phone.clone()),
            name: Set(assignor.name.clone()),
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Assignor {} not found", assignor.id))
            }
            e => DomainError::Database(e.to_string()),
        })?;

        Ok(())
    }

    async fn delete(&self, assignor: &Assignor) -> Result<(), DomainError> {
        let result = assignors::Entity::delete_by_id(assignor.id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound(format!(
                "Assignor {} not found",
                assignor.id
            )));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &AssignorId) -> Result<Option<Assignor>, DomainError> {
        let result = assignors::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn find_by_document(&self, document: &str) -> Result<Option<Assignor>, DomainError> {
        let result = assignors::Entity::find()
            .filter(assignors::Column::Document.eq(document))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<assignors::Model> for Assignor {
    fn from(model: assignors::Model) -> Self {
        Assignor {
            id: AssignorId(model.id),
            document: model.document,
            email: model.email,
            phone: model.phone,
            name: model.name,
        }
    }
}
