use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000008_employment_application::EmploymentApplication;

static IDX_APPROVAL_HISTORY_APPLICATION_ID: &str = "idx-approval_history-application_id";
static FK_APPROVAL_HISTORY_APPLICATION_ID: &str = "fk-approval_history-application_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApprovalHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(ApprovalHistory::Id))
                    .col(integer(ApprovalHistory::ApplicationId))
                    .col(integer(ApprovalHistory::UserId))
                    .col(string(ApprovalHistory::UserRole))
                    .col(string(ApprovalHistory::Action))
                    .col(text_null(ApprovalHistory::Comments))
                    .col(string(ApprovalHistory::CreatedBy))
                    .col(timestamp(ApprovalHistory::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPROVAL_HISTORY_APPLICATION_ID)
                    .table(ApprovalHistory::Table)
                    .col(ApprovalHistory::ApplicationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPROVAL_HISTORY_APPLICATION_ID)
                    .from_tbl(ApprovalHistory::Table)
                    .from_col(ApprovalHistory::ApplicationId)
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
                    .name(FK_APPROVAL_HISTORY_APPLICATION_ID)
                    .table(ApprovalHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPROVAL_HISTORY_APPLICATION_ID)
                    .table(ApprovalHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ApprovalHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ApprovalHistory {
    Table,
    Id,
    ApplicationId,
    UserId,
    UserRole,
    Action,
    Comments,
    CreatedBy,
    CreatedAt,
}
