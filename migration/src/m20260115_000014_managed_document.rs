use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ManagedDocument::Table)
                    .if_not_exists()
                    .col(pk_auto(ManagedDocument::Id))
                    .col(string_uniq(ManagedDocument::DocumentCode))
                    .col(string(ManagedDocument::DocumentTitle))
                    .col(string(ManagedDocument::DocumentType))
                    .col(string(ManagedDocument::Category))
                    .col(integer(ManagedDocument::CurrentRevision).default(0))
                    .col(string(ManagedDocument::Status))
                    .col(string(ManagedDocument::PreparedBy))
                    .col(string_null(ManagedDocument::ReviewedBy))
                    .col(string_null(ManagedDocument::ApprovedBy))
                    .col(date_null(ManagedDocument::EffectiveDate))
                    .col(string_null(ManagedDocument::FilePath))
                    .col(text_null(ManagedDocument::Description))
                    .col(integer(ManagedDocument::RetentionPeriod).default(5))
                    .col(timestamp(ManagedDocument::CreatedAt))
                    .col(timestamp(ManagedDocument::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ManagedDocument::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ManagedDocument {
    Table,
    Id,
    DocumentCode,
    DocumentTitle,
    DocumentType,
    Category,
    CurrentRevision,
    Status,
    PreparedBy,
    ReviewedBy,
    ApprovedBy,
    EffectiveDate,
    FilePath,
    Description,
    RetentionPeriod,
    CreatedAt,
    UpdatedAt,
}
