use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000014_managed_document::ManagedDocument;

static IDX_DOCUMENT_REVISION_DOCUMENT_ID: &str = "idx-document_revision-document_id";
static FK_DOCUMENT_REVISION_DOCUMENT_ID: &str = "fk-document_revision-document_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentRevision::Table)
                    .if_not_exists()
                    .col(pk_auto(DocumentRevision::Id))
                    .col(integer(DocumentRevision::DocumentId))
                    .col(integer(DocumentRevision::RevisionNumber))
                    .col(text_null(DocumentRevision::ChangeSummary))
                    .col(string_null(DocumentRevision::FilePath))
                    .col(string(DocumentRevision::PreparedBy))
                    .col(string(DocumentRevision::Status))
                    .col(timestamp(DocumentRevision::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DOCUMENT_REVISION_DOCUMENT_ID)
                    .table(DocumentRevision::Table)
                    .col(DocumentRevision::DocumentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DOCUMENT_REVISION_DOCUMENT_ID)
                    .from_tbl(DocumentRevision::Table)
                    .from_col(DocumentRevision::DocumentId)
                    .to_tbl(ManagedDocument::Table)
                    .to_col(ManagedDocument::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DOCUMENT_REVISION_DOCUMENT_ID)
                    .table(DocumentRevision::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DOCUMENT_REVISION_DOCUMENT_ID)
                    .table(DocumentRevision::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DocumentRevision::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocumentRevision {
    Table,
    Id,
    DocumentId,
    RevisionNumber,
    ChangeSummary,
    FilePath,
    PreparedBy,
    Status,
    CreatedAt,
}
