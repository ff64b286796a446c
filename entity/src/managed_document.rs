//! Controlled QMS document under revision control.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum DocumentStatus {
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "PENDING_APPROVAL")]
    PendingApproval,
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    #[sea_orm(string_value = "OBSOLETE")]
    Obsolete,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "managed_document")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub document_code: String,
    pub document_title: String,
    pub document_type: String,
    pub category: String,
    pub current_revision: i32,
    pub status: DocumentStatus,
    pub prepared_by: String,
    #[sea_orm(nullable)]
    pub reviewed_by: Option<String>,
    #[sea_orm(nullable)]
    pub approved_by: Option<String>,
    #[sea_orm(nullable)]
    pub effective_date: Option<Date>,
    #[sea_orm(nullable)]
    pub file_path: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Retention period in years.
    pub retention_period: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::document_revision::Entity")]
    DocumentRevision,
}

impl Related<super::document_revision::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentRevision.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
