use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260115_000002_vessel::Vessel, m20260115_000004_crew::Crew};

static IDX_ASSIGNMENT_CREW_ID: &str = "idx-assignment-crew_id";
static IDX_ASSIGNMENT_VESSEL_ID: &str = "idx-assignment-vessel_id";
static FK_ASSIGNMENT_CREW_ID: &str = "fk-assignment-crew_id";
static FK_ASSIGNMENT_VESSEL_ID: &str = "fk-assignment-vessel_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignment::Table)
                    .if_not_exists()
                    .col(pk_auto(Assignment::Id))
                    .col(integer(Assignment::CrewId))
                    .col(integer_null(Assignment::VesselId))
                    .col(string(Assignment::VesselName))
                    .col(string(Assignment::Rank))
                    .col(string(Assignment::Status))
                    .col(date_null(Assignment::SignOn))
                    .col(date_null(Assignment::SignOff))
                    .col(timestamp(Assignment::CreatedAt))
                    .col(timestamp(Assignment::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSIGNMENT_CREW_ID)
                    .table(Assignment::Table)
                    .col(Assignment::CrewId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ASSIGNMENT_VESSEL_ID)
                    .table(Assignment::Table)
                    .col(Assignment::VesselId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSIGNMENT_CREW_ID)
                    .from_tbl(Assignment::Table)
                    .from_col(Assignment::CrewId)
                    .to_tbl(Crew::Table)
                    .to_col(Crew::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ASSIGNMENT_VESSEL_ID)
                    .from_tbl(Assignment::Table)
                    .from_col(Assignment::VesselId)
                    .to_tbl(Vessel::Table)
                    .to_col(Vessel::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ASSIGNMENT_VESSEL_ID)
                    .table(Assignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ASSIGNMENT_CREW_ID)
                    .table(Assignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSIGNMENT_VESSEL_ID)
                    .table(Assignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ASSIGNMENT_CREW_ID)
                    .table(Assignment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Assignment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Assignment {
    Table,
    Id,
    CrewId,
    VesselId,
    VesselName,
    Rank,
    Status,
    SignOn,
    SignOff,
    CreatedAt,
    UpdatedAt,
}
