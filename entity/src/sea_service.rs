//! Prior sea-going experience, usually entered from a seafarer's CV.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sea_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub crew_id: i32,
    pub vessel_name: String,
    pub rank: String,
    #[sea_orm(nullable)]
    pub grt: Option<i32>,
    #[sea_orm(nullable)]
    pub dwt: Option<i32>,
    #[sea_orm(nullable)]
    pub engine_type: Option<String>,
    #[sea_orm(nullable)]
    pub bhp: Option<i32>,
    #[sea_orm(nullable)]
    pub company_name: Option<String>,
    #[sea_orm(nullable)]
    pub flag: Option<String>,
    #[sea_orm(nullable)]
    pub sign_on: Option<Date>,
    #[sea_orm(nullable)]
    pub sign_off: Option<Date>,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::crew::Entity",
        from = "Column::CrewId",
        to = "super::crew::Column::Id"
    )]
    Crew,
}

impl Related<super::crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crew.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
