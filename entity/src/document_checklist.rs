//! Per-crew document checklist instance. `items` holds a JSON list of
//! `{code, label, ok, remarks}` entries validated at the API boundary.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document_checklist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub crew_id: i32,
    #[sea_orm(nullable)]
    pub application_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub items: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarks: Option<String>,
    #[sea_orm(nullable)]
    pub completed_by: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::employment_application::Entity",
        from = "Column::ApplicationId",
        to = "super::employment_application::Column::Id"
    )]
    EmploymentApplication,
}

impl Related<super::crew::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Crew.def()
    }
}

impl Related<super::employment_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmploymentApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
