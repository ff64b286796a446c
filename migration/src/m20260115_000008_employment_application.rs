use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000004_crew::Crew;

static IDX_EMPLOYMENT_APPLICATION_CREW_ID: &str = "idx-employment_application-crew_id";
static FK_EMPLOYMENT_APPLICATION_CREW_ID: &str = "fk-employment_application-crew_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmploymentApplication::Table)
                    .if_not_exists()
                    .col(pk_auto(EmploymentApplication::Id))
                    .col(integer(EmploymentApplication::CrewId))
                    .col(string(EmploymentApplication::AppliedRank))
                    .col(string(EmploymentApplication::Status))
                    .col(integer(EmploymentApplication::CurrentApprovalLevel).default(1))
                    .col(date(EmploymentApplication::ApplicationDate))
                    .col(text_null(EmploymentApplication::Notes))
                    .col(string_null(EmploymentApplication::RejectionReason))
                    .col(timestamp_null(EmploymentApplication::OfferedDate))
                    .col(timestamp_null(EmploymentApplication::AcceptedDate))
                    .col(timestamp(EmploymentApplication::CreatedAt))
                    .col(timestamp(EmploymentApplication::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMPLOYMENT_APPLICATION_CREW_ID)
                    .table(EmploymentApplication::Table)
                    .col(EmploymentApplication::CrewId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EMPLOYMENT_APPLICATION_CREW_ID)
                    .from_tbl(EmploymentApplication::Table)
                    .from_col(EmploymentApplication::CrewId)
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
                    .name(FK_EMPLOYMENT_APPLICATION_CREW_ID)
                    .table(EmploymentApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMPLOYMENT_APPLICATION_CREW_ID)
                    .table(EmploymentApplication::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(EmploymentApplication::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EmploymentApplication {
    Table,
    Id,
    CrewId,
    AppliedRank,
    Status,
    CurrentApprovalLevel,
    ApplicationDate,
    Notes,
    RejectionReason,
    OfferedDate,
    AcceptedDate,
    CreatedAt,
    UpdatedAt,
}
