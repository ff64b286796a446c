use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vessel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub flag: String,
    #[sea_orm(nullable)]
    pub vessel_type: Option<String>,
    #[sea_orm(nullable)]
    pub grt: Option<i32>,
    #[sea_orm(nullable)]
    pub dwt: Option<i32>,
    #[sea_orm(unique, nullable)]
    pub imo: Option<String>,
    #[sea_orm(nullable)]
    pub call_sign: Option<String>,
    #[sea_orm(nullable)]
    pub owner_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::assignment::Entity")]
    Assignment,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
