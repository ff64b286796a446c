use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct ManagedDocumentDto {
    pub id: i32,
    pub document_code: String,
    pub document_title: String,
    pub document_type: String,
    pub category: String,
    pub current_revision: i32,
    pub status: String,
    pub prepared_by: String,
    pub reviewed_by: Option<String>,
    pub approved_by: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub file_path: Option<String>,
    pub description: Option<String>,
    /// Retention period in years.
    pub retention_period: i32,
}

impl From<entity::managed_document::Model> for ManagedDocumentDto {
    fn from(document: entity::managed_document::Model) -> Self {
        Self {
            id: document.id,
            document_code: document.document_code,
            document_title: document.document_title,
            document_type: document.document_type,
            category: document.category,
            current_revision: document.current_revision,
            status: document.status.to_value(),
            prepared_by: document.prepared_by,
            reviewed_by: document.reviewed_by,
            approved_by: document.approved_by,
            effective_date: document.effective_date,
            file_path: document.file_path,
            description: document.description,
            retention_period: document.retention_period,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct DocumentRevisionDto {
    pub id: i32,
    pub document_id: i32,
    pub revision_number: i32,
    pub change_summary: Option<String>,
    pub file_path: Option<String>,
    pub prepared_by: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::document_revision::Model> for DocumentRevisionDto {
    fn from(revision: entity::document_revision::Model) -> Self {
        Self {
            id: revision.id,
            document_id: revision.document_id,
            revision_number: revision.revision_number,
            change_summary: revision.change_summary,
            file_path: revision.file_path,
            prepared_by: revision.prepared_by,
            status: revision.status.to_value(),
            created_at: revision.created_at,
        }
    }
}

/// Document detail with its revision trail, newest first.
#[derive(Serialize, ToSchema)]
pub struct DocumentDetailDto {
    pub document: ManagedDocumentDto,
    pub revisions: Vec<DocumentRevisionDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateDocumentDto {
    pub document_code: String,
    pub document_title: String,
    pub document_type: String,
    pub category: String,
    pub file_path: Option<String>,
    pub description: Option<String>,
    /// Retention period in years; defaults to 5.
    pub retention_period: Option<i32>,
}

/// Body of `POST /api/documents/{id}/approve`. A DRAFT document moves to
/// PENDING_APPROVAL on review; a PENDING_APPROVAL document moves to APPROVED
/// on approval. REJECTED returns it to DRAFT at either step.
#[derive(Deserialize, ToSchema)]
pub struct DocumentActionDto {
    /// `APPROVED` or `REJECTED`.
    pub action: String,
    pub comments: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ReviseDocumentDto {
    pub change_summary: String,
    pub file_path: Option<String>,
}
