use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000004_crew::Crew, m20260115_000012_form_template::FormTemplate};

static IDX_FORM_SUBMISSION_TEMPLATE_ID: &str = "idx-form_submission-template_id";
static FK_FORM_SUBMISSION_TEMPLATE_ID: &str = "fk-form_submission-template_id";
static FK_FORM_SUBMISSION_CREW_ID: &str = "fk-form_submission-crew_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormSubmission::Table)
                    .if_not_exists()
                    .col(pk_auto(FormSubmission::Id))
                    .col(integer(FormSubmission::TemplateId))
                    .col(integer_null(FormSubmission::CrewId))
                    .col(integer_null(FormSubmission::ApplicationId))
                    .col(string(FormSubmission::Status))
                    .col(text(FormSubmission::FormData))
                    .col(timestamp(FormSubmission::CreatedAt))
                    .col(timestamp(FormSubmission::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORM_SUBMISSION_TEMPLATE_ID)
                    .table(FormSubmission::Table)
                    .col(FormSubmission::TemplateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FORM_SUBMISSION_TEMPLATE_ID)
                    .from_tbl(FormSubmission::Table)
                    .from_col(FormSubmission::TemplateId)
                    .to_tbl(FormTemplate::Table)
                    .to_col(FormTemplate::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FORM_SUBMISSION_CREW_ID)
                    .from_tbl(FormSubmission::Table)
                    .from_col(FormSubmission::CrewId)
                    .to_tbl(Crew::Table)
                    .to_col(Crew::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FORM_SUBMISSION_CREW_ID)
                    .table(FormSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FORM_SUBMISSION_TEMPLATE_ID)
                    .table(FormSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FORM_SUBMISSION_TEMPLATE_ID)
                    .table(FormSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FormSubmission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FormSubmission {
    Table,
    Id,
    TemplateId,
    CrewId,
    ApplicationId,
    Status,
    FormData,
    CreatedAt,
    UpdatedAt,
}
