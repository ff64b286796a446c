//! Revision record of a managed document. Revisions are only appended;
//! the document's `current_revision` points at the latest one.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::managed_document::DocumentStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "document_revision")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub document_id: i32,
    pub revision_number: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub change_summary: Option<String>,
    #[sea_orm(nullable)]
    pub file_path: Option<String>,
    pub prepared_by: String,
    pub status: DocumentStatus,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::managed_document::Entity",
        from = "Column::DocumentId",
        to = "super::managed_document::Column::Id"
    )]
    ManagedDocument,
}

impl Related<super::managed_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ManagedDocument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
