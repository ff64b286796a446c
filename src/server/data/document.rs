use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use entity::managed_document::DocumentStatus;

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    /// Creates a new instance of [`DocumentRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a managed document in DRAFT at revision 0, together with its
    /// initial revision record.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        document_code: String,
        document_title: String,
        document_type: String,
        category: String,
        prepared_by: String,
        file_path: Option<String>,
        description: Option<String>,
        retention_period: i32,
    ) -> Result<entity::managed_document::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let document = entity::managed_document::ActiveModel {
            document_code: ActiveValue::Set(document_code),
            document_title: ActiveValue::Set(document_title),
            document_type: ActiveValue::Set(document_type),
            category: ActiveValue::Set(category),
            current_revision: ActiveValue::Set(0),
            status: ActiveValue::Set(DocumentStatus::Draft),
            prepared_by: ActiveValue::Set(prepared_by.clone()),
            file_path: ActiveValue::Set(file_path.clone()),
            description: ActiveValue::Set(description),
            retention_period: ActiveValue::Set(retention_period),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let document = document.insert(self.db).await?;

        self.insert_revision(
            document.id,
            0,
            Some("Initial issue".to_string()),
            file_path,
            prepared_by,
            DocumentStatus::Draft,
        )
        .await?;

        Ok(document)
    }

    pub async fn get_by_id(
        &self,
        document_id: i32,
    ) -> Result<Option<entity::managed_document::Model>, DbErr> {
        entity::prelude::ManagedDocument::find_by_id(document_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_code(
        &self,
        document_code: &str,
    ) -> Result<Option<entity::managed_document::Model>, DbErr> {
        entity::prelude::ManagedDocument::find()
            .filter(entity::managed_document::Column::DocumentCode.eq(document_code))
            .one(self.db)
            .await
    }

    pub async fn list(
        &self,
        status: Option<DocumentStatus>,
        category: Option<&str>,
    ) -> Result<Vec<entity::managed_document::Model>, DbErr> {
        let mut query = entity::prelude::ManagedDocument::find();

        if let Some(status) = status {
            query = query.filter(entity::managed_document::Column::Status.eq(status));
        }
        if let Some(category) = category {
            query = query.filter(entity::managed_document::Column::Category.eq(category));
        }

        query
            .order_by_asc(entity::managed_document::Column::DocumentCode)
            .all(self.db)
            .await
    }

    /// Applies a workflow step's outcome: status, the acting user's name in
    /// the step field, and the effective date on final approval.
    pub async fn update_status(
        &self,
        document: entity::managed_document::Model,
        status: DocumentStatus,
        reviewed_by: Option<String>,
        approved_by: Option<String>,
        effective_date: Option<NaiveDate>,
    ) -> Result<entity::managed_document::Model, DbErr> {
        let mut document = document.into_active_model();

        document.status = ActiveValue::Set(status);

        if let Some(reviewer) = reviewed_by {
            document.reviewed_by = ActiveValue::Set(Some(reviewer));
        }
        if let Some(approver) = approved_by {
            document.approved_by = ActiveValue::Set(Some(approver));
        }
        if let Some(date) = effective_date {
            document.effective_date = ActiveValue::Set(Some(date));
        }
        document.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        document.update(self.db).await
    }

    /// Opens the next revision: bumps `current_revision`, resets the
    /// document to DRAFT and records the revision row.
    pub async fn revise(
        &self,
        document: entity::managed_document::Model,
        change_summary: String,
        file_path: Option<String>,
        prepared_by: String,
    ) -> Result<entity::managed_document::Model, DbErr> {
        let next_revision = document.current_revision + 1;

        self.insert_revision(
            document.id,
            next_revision,
            Some(change_summary),
            file_path.clone(),
            prepared_by.clone(),
            DocumentStatus::Draft,
        )
        .await?;

        let mut document = document.into_active_model();

        document.current_revision = ActiveValue::Set(next_revision);
        document.status = ActiveValue::Set(DocumentStatus::Draft);
        document.prepared_by = ActiveValue::Set(prepared_by);
        document.reviewed_by = ActiveValue::Set(None);
        document.approved_by = ActiveValue::Set(None);
        document.effective_date = ActiveValue::Set(None);
        if let Some(path) = file_path {
            document.file_path = ActiveValue::Set(Some(path));
        }
        document.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        document.update(self.db).await
    }

    /// Revision trail, newest first.
    pub async fn revisions_for(
        &self,
        document_id: i32,
    ) -> Result<Vec<entity::document_revision::Model>, DbErr> {
        entity::prelude::DocumentRevision::find()
            .filter(entity::document_revision::Column::DocumentId.eq(document_id))
            .order_by_desc(entity::document_revision::Column::RevisionNumber)
            .all(self.db)
            .await
    }

    /// Mirrors a status change onto the latest revision record.
    pub async fn update_latest_revision_status(
        &self,
        document_id: i32,
        revision_number: i32,
        status: DocumentStatus,
    ) -> Result<(), DbErr> {
        let revision = entity::prelude::DocumentRevision::find()
            .filter(entity::document_revision::Column::DocumentId.eq(document_id))
            .filter(entity::document_revision::Column::RevisionNumber.eq(revision_number))
            .one(self.db)
            .await?;

        if let Some(revision) = revision {
            let mut revision = revision.into_active_model();
            revision.status = ActiveValue::Set(status);
            revision.update(self.db).await?;
        }

        Ok(())
    }

    async fn insert_revision(
        &self,
        document_id: i32,
        revision_number: i32,
        change_summary: Option<String>,
        file_path: Option<String>,
        prepared_by: String,
        status: DocumentStatus,
    ) -> Result<entity::document_revision::Model, DbErr> {
        let revision = entity::document_revision::ActiveModel {
            document_id: ActiveValue::Set(document_id),
            revision_number: ActiveValue::Set(revision_number),
            change_summary: ActiveValue::Set(change_summary),
            file_path: ActiveValue::Set(file_path),
            prepared_by: ActiveValue::Set(prepared_by),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        revision.insert(self.db).await
    }
}

#[cfg(test)]
mod tests {
    mod revise_tests {
        use entity::managed_document::DocumentStatus;
        use muster_test_utils::prelude::*;

        use crate::server::data::document::DocumentRepository;

        /// Expect a revise to bump the revision and return to DRAFT
        #[tokio::test]
        async fn test_revise_increments_revision() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::ManagedDocument,
                entity::prelude::DocumentRevision,
            )?;
            let repository = DocumentRepository::new(&test.state.db);

            let document = repository
                .create(
                    "HGF-QM-01".to_string(),
                    "Quality Manual".to_string(),
                    "MANUAL".to_string(),
                    "QMS".to_string(),
                    "The Director".to_string(),
                    None,
                    None,
                    5,
                )
                .await?;

            let revised = repository
                .revise(
                    document,
                    "Annual review".to_string(),
                    None,
                    "The Director".to_string(),
                )
                .await?;

            assert_eq!(revised.current_revision, 1);
            assert_eq!(revised.status, DocumentStatus::Draft);
            assert!(revised.reviewed_by.is_none());
            assert!(revised.effective_date.is_none());

            let revisions = repository.revisions_for(revised.id).await?;
            assert_eq!(revisions.len(), 2);
            assert_eq!(revisions[0].revision_number, 1);

            Ok(())
        }
    }
}
