use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000003_staff_user::StaffUser,
    m20260115_000008_employment_application::EmploymentApplication,
};

// One decision per application and level; a racing duplicate write loses on
// this index instead of double-advancing the chain.
static IDX_APPROVAL_DECISION_APPLICATION_LEVEL: &str =
    "idx-approval_decision-application_id-level";
static FK_APPROVAL_DECISION_APPLICATION_ID: &str = "fk-approval_decision-application_id";
static FK_APPROVAL_DECISION_DECIDED_BY: &str = "fk-approval_decision-decided_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ApprovalDecision::Table)
                    .if_not_exists()
                    .col(pk_auto(ApprovalDecision::Id))
                    .col(integer(ApprovalDecision::ApplicationId))
                    .col(integer(ApprovalDecision::Level))
                    .col(string(ApprovalDecision::Role))
                    .col(string(ApprovalDecision::Decision))
                    .col(text_null(ApprovalDecision::Comments))
                    .col(integer(ApprovalDecision::DecidedBy))
                    .col(timestamp(ApprovalDecision::DecidedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_APPROVAL_DECISION_APPLICATION_LEVEL)
                    .table(ApprovalDecision::Table)
                    .col(ApprovalDecision::ApplicationId)
                    .col(ApprovalDecision::Level)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPROVAL_DECISION_APPLICATION_ID)
                    .from_tbl(ApprovalDecision::Table)
                    .from_col(ApprovalDecision::ApplicationId)
                    .to_tbl(EmploymentApplication::Table)
                    .to_col(EmploymentApplication::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_APPROVAL_DECISION_DECIDED_BY)
                    .from_tbl(ApprovalDecision::Table)
                    .from_col(ApprovalDecision::DecidedBy)
                    .to_tbl(StaffUser::Table)
                    .to_col(StaffUser::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPROVAL_DECISION_DECIDED_BY)
                    .table(ApprovalDecision::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_APPROVAL_DECISION_APPLICATION_ID)
                    .table(ApprovalDecision::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_APPROVAL_DECISION_APPLICATION_LEVEL)
                    .table(ApprovalDecision::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ApprovalDecision::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ApprovalDecision {
    Table,
    Id,
    ApplicationId,
    Level,
    Role,
    Decision,
    Comments,
    DecidedBy,
    DecidedAt,
}
