use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000004_crew::Crew;

static IDX_SEA_SERVICE_CREW_ID: &str = "idx-sea_service-crew_id";
static FK_SEA_SERVICE_CREW_ID: &str = "fk-sea_service-crew_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeaService::Table)
                    .if_not_exists()
                    .col(pk_auto(SeaService::Id))
                    .col(integer(SeaService::CrewId))
                    .col(string(SeaService::VesselName))
                    .col(string(SeaService::Rank))
                    .col(integer_null(SeaService::Grt))
                    .col(integer_null(SeaService::Dwt))
                    .col(string_null(SeaService::EngineType))
                    .col(integer_null(SeaService::Bhp))
                    .col(string_null(SeaService::CompanyName))
                    .col(string_null(SeaService::Flag))
                    .col(date_null(SeaService::SignOn))
                    .col(date_null(SeaService::SignOff))
                    .col(text_null(SeaService::Remarks))
                    .col(timestamp(SeaService::CreatedAt))
                    .col(timestamp(SeaService::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SEA_SERVICE_CREW_ID)
                    .table(SeaService::Table)
                    .col(SeaService::CrewId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SEA_SERVICE_CREW_ID)
                    .from_tbl(SeaService::Table)
                    .from_col(SeaService::CrewId)
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
                    .name(FK_SEA_SERVICE_CREW_ID)
                    .table(SeaService::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SEA_SERVICE_CREW_ID)
                    .table(SeaService::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SeaService::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SeaService {
    Table,
    Id,
    CrewId,
    VesselName,
    Rank,
    Grt,
    Dwt,
    EngineType,
    Bhp,
    CompanyName,
    Flag,
    SignOn,
    SignOff,
    Remarks,
    CreatedAt,
    UpdatedAt,
}
