use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000001_owner::Owner;

static IDX_VESSEL_OWNER_ID: &str = "idx-vessel-owner_id";
static FK_VESSEL_OWNER_ID: &str = "fk-vessel-owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vessel::Table)
                    .if_not_exists()
                    .col(pk_auto(Vessel::Id))
                    .col(string(Vessel::Name))
                    .col(string(Vessel::Flag))
                    .col(string_null(Vessel::VesselType))
                    .col(integer_null(Vessel::Grt))
                    .col(integer_null(Vessel::Dwt))
                    .col(string_null(Vessel::Imo).unique_key())
                    .col(string_null(Vessel::CallSign))
                    .col(integer_null(Vessel::OwnerId))
                    .col(timestamp(Vessel::CreatedAt))
                    .col(timestamp(Vessel::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VESSEL_OWNER_ID)
                    .table(Vessel::Table)
                    .col(Vessel::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_VESSEL_OWNER_ID)
                    .from_tbl(Vessel::Table)
                    .from_col(Vessel::OwnerId)
                    .to_tbl(Owner::Table)
                    .to_col(Owner::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_VESSEL_OWNER_ID)
                    .table(Vessel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VESSEL_OWNER_ID)
                    .table(Vessel::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vessel::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vessel {
    Table,
    Id,
    Name,
    Flag,
    VesselType,
    Grt,
    Dwt,
    Imo,
    CallSign,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}
