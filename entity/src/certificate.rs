//! Typed document held by a crew member. Expiry classification is computed
//! at read time from `expiry_date`, never stored.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certificate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub crew_id: i32,
    /// Certificate-type code from the catalog (e.g. COC-MASTER, PASSPORT).
    pub r#type: String,
    #[sea_orm(nullable)]
    pub certificate_number: Option<String>,
    #[sea_orm(nullable)]
    pub issue_date: Option<Date>,
    #[sea_orm(nullable)]
    pub expiry_date: Option<Date>,
    #[sea_orm(nullable)]
    pub issuer: Option<String>,
    #[sea_orm(nullable)]
    pub document_path: Option<String>,
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
