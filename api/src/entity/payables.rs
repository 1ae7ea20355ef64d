//! SeaORM model for the `payables` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payables")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub assignor_id: Uuid,
    pub emission_date: Date,
    #[sea_orm(column_type = "Double")]
    pub value: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignors::Entity",
        from = "Column::AssignorId",
        to = "super::assignors::Column::Id"
    )]
    Assignors,
}

impl Related<super::assignors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
