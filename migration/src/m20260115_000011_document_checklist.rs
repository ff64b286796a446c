use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000004_crew::Crew,
    m20260115_000008_employment_application::EmploymentApplication,
};

static IDX_DOCUMENT_CHECKLIST_CREW_ID: &str = "idx-document_checklist-crew_id";
static FK_DOCUMENT_CHECKLIST_CREW_ID: &str = "fk-document_checklist-crew_id";
static FK_DOCUMENT_CHECKLIST_APPLICATION_ID: &str = "fk-document_checklist-application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DocumentChecklist::Table)
                    .if_not_exists()
                    .col(pk_auto(DocumentChecklist::Id))
                    .col(integer(DocumentChecklist::CrewId))
                    .col(integer_null(DocumentChecklist::ApplicationId))
                    .col(text(DocumentChecklist::Items))
                    .col(text_null(DocumentChecklist::Remarks))
                    .col(string_null(DocumentChecklist::CompletedBy))
                    .col(timestamp(DocumentChecklist::CreatedAt))
                    .col(timestamp(DocumentChecklist::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DOCUMENT_CHECKLIST_CREW_ID)
                    .table(DocumentChecklist::Table)
                    .col(DocumentChecklist::CrewId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DOCUMENT_CHECKLIST_CREW_ID)
                    .from_tbl(DocumentChecklist::Table)
                    .from_col(DocumentChecklist::CrewId)
                    .to_tbl(Crew::Table)
                    .to_col(Crew::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DOCUMENT_CHECKLIST_APPLICATION_ID)
                    .from_tbl(DocumentChecklist::Table)
                    .from_col(DocumentChecklist::ApplicationId)
                    .to_tbl(EmploymentApplication::Table)
                    .to_col(EmploymentApplication::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DOCUMENT_CHECKLIST_APPLICATION_ID)
                    .table(DocumentChecklist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DOCUMENT_CHECKLIST_CREW_ID)
                    .table(DocumentChecklist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DOCUMENT_CHECKLIST_CREW_ID)
                    .table(DocumentChecklist::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DocumentChecklist::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DocumentChecklist {
    Table,
    Id,
    CrewId,
    ApplicationId,
    Items,
    Remarks,
    CompletedBy,
    CreatedAt,
    UpdatedAt,
}
