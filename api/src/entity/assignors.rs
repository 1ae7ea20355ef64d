//! SeaORM model for the `assignors` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub document: String,
    pub email: String,
    pub phone: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payables::Entity")]
    Payables,
}

impl Related<super::payables::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payables.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
