//! Controlled QMS document workflow.
//!
//! DRAFT moves to PENDING_APPROVAL on review, PENDING_APPROVAL to APPROVED
//! on the director's approval (which stamps the effective date). REJECTED at
//! either step returns the document to DRAFT. Revising an approved document
//! opens the next revision back in DRAFT.

use chrono::Utc;
use sea_orm::{ActiveEnum, DatabaseConnection};

use entity::managed_document::DocumentStatus;
use entity::staff_user::StaffRole;

use crate::model::document::{
    CreateDocumentDto, DocumentActionDto, DocumentDetailDto, DocumentRevisionDto,
    ManagedDocumentDto, ReviseDocumentDto,
};
use crate::server::data::document::DocumentRepository;
use crate::server::error::{AuthError, Error};

pub const DEFAULT_RETENTION_YEARS: i32 = 5;

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    /// Creates a new instance of [`DocumentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        dto: CreateDocumentDto,
        actor: &entity::staff_user::Model,
    ) -> Result<ManagedDocumentDto, Error> {
        let repository = DocumentRepository::new(self.db);

        if repository.get_by_code(&dto.document_code).await?.is_some() {
            return Err(Error::Conflict(format!(
                "Document {} already exists",
                dto.document_code
            )));
        }

        let document = repository
            .create(
                dto.document_code,
                dto.document_title,
                dto.document_type,
                dto.category,
                actor.full_name.clone(),
                dto.file_path,
                dto.description,
                dto.retention_period.unwrap_or(DEFAULT_RETENTION_YEARS),
            )
            .await?;

        tracing::info!(
            document_code = document.document_code,
            by = actor.username,
            "document registered"
        );

        Ok(document.into())
    }

    pub async fn list(
        &self,
        status: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<ManagedDocumentDto>, Error> {
        let status = status
            .map(|raw| {
                DocumentStatus::try_from_value(&raw.to_string())
                    .map_err(|_| Error::Validation(format!("Unknown document status {raw}")))
            })
            .transpose()?;

        let repository = DocumentRepository::new(self.db);
        let documents = repository.list(status, category).await?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, document_id: i32) -> Result<DocumentDetailDto, Error> {
        let repository = DocumentRepository::new(self.db);

        let document = repository
            .get_by_id(document_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Document {document_id}")))?;
        let revisions = repository
            .revisions_for(document_id)
            .await?
            .into_iter()
            .map(DocumentRevisionDto::from)
            .collect();

        Ok(DocumentDetailDto {
            document: document.into(),
            revisions,
        })
    }

    /// Applies one workflow action. Review of a DRAFT takes the
    /// documentation officer or the director; final approval the director
    /// alone.
    pub async fn act(
        &self,
        document_id: i32,
        actor: &entity::staff_user::Model,
        dto: DocumentActionDto,
    ) -> Result<ManagedDocumentDto, Error> {
        let approved = match dto.action.as_str() {
            "APPROVED" => true,
            "REJECTED" => false,
            other => {
                return Err(Error::Validation(format!("Unknown document action {other}")));
            }
        };

        let repository = DocumentRepository::new(self.db);
        let document = repository
            .get_by_id(document_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Document {document_id}")))?;

        let updated = match (document.status, approved) {
            (DocumentStatus::Draft, true) => {
                if !matches!(
                    actor.role,
                    StaffRole::DocumentationOfficer | StaffRole::Director
                ) {
                    return Err(AuthError::Forbidden {
                        role: actor.role.to_value(),
                        action: "review a document".to_string(),
                    }
                    .into());
                }

                repository
                    .update_status(
                        document,
                        DocumentStatus::PendingApproval,
                        Some(actor.full_name.clone()),
                        None,
                        None,
                    )
                    .await?
            }
            (DocumentStatus::PendingApproval, true) => {
                if actor.role != StaffRole::Director {
                    return Err(AuthError::Forbidden {
                        role: actor.role.to_value(),
                        action: "approve a document".to_string(),
                    }
                    .into());
                }

                repository
                    .update_status(
                        document,
                        DocumentStatus::Approved,
                        None,
                        Some(actor.full_name.clone()),
                        Some(Utc::now().date_naive()),
                    )
                    .await?
            }
            (DocumentStatus::Draft | DocumentStatus::PendingApproval, false) => {
                if !matches!(
                    actor.role,
                    StaffRole::DocumentationOfficer | StaffRole::Director
                ) {
                    return Err(AuthError::Forbidden {
                        role: actor.role.to_value(),
                        action: "reject a document".to_string(),
                    }
                    .into());
                }

                repository
                    .update_status(document, DocumentStatus::Draft, None, None, None)
                    .await?
            }
            (status, _) => {
                return Err(Error::Conflict(format!(
                    "Document {} is {}",
                    document_id,
                    status.to_value()
                )));
            }
        };

        repository
            .update_latest_revision_status(
                updated.id,
                updated.current_revision,
                updated.status,
            )
            .await?;

        tracing::info!(
            document_code = updated.document_code,
            status = updated.status.to_value(),
            by = actor.username,
            "document workflow action"
        );

        Ok(updated.into())
    }

    /// Opens the next revision of an approved document.
    pub async fn revise(
        &self,
        document_id: i32,
        actor: &entity::staff_user::Model,
        dto: ReviseDocumentDto,
    ) -> Result<ManagedDocumentDto, Error> {
        let repository = DocumentRepository::new(self.db);
        let document = repository
            .get_by_id(document_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Document {document_id}")))?;

        if document.status != DocumentStatus::Approved {
            return Err(Error::Conflict(format!(
                "Only an APPROVED document can be revised; document {} is {}",
                document_id,
                document.status.to_value()
            )));
        }

        let revised = repository
            .revise(
                document,
                dto.change_summary,
                dto.file_path,
                actor.full_name.clone(),
            )
            .await?;

        tracing::info!(
            document_code = revised.document_code,
            revision = revised.current_revision,
            by = actor.username,
            "document revision opened"
        );

        Ok(revised.into())
    }
}
