use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Crew::Table)
                    .if_not_exists()
                    .col(pk_auto(Crew::Id))
                    .col(string_uniq(Crew::CrewCode))
                    .col(string(Crew::FullName))
                    .col(string(Crew::Rank))
                    .col(string(Crew::CrewStatus))
                    .col(string_null(Crew::Vessel))
                    .col(date_null(Crew::DateOfBirth))
                    .col(string_null(Crew::PlaceOfBirth))
                    .col(string_null(Crew::Nationality))
                    .col(string_null(Crew::Religion))
                    .col(string_null(Crew::MaritalStatus))
                    .col(text_null(Crew::Address))
                    .col(string_null(Crew::Phone))
                    .col(string_null(Crew::Email))
                    .col(boolean(Crew::ReportedToOffice).default(false))
                    .col(timestamp_null(Crew::ReportedToOfficeDate))
                    .col(string_null(Crew::InactiveReason))
                    .col(text_null(Crew::OffboardNotes))
                    .col(timestamp_null(Crew::LastOffboardDate))
                    .col(timestamp(Crew::CreatedAt))
                    .col(timestamp(Crew::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Crew::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Crew {
    Table,
    Id,
    CrewCode,
    FullName,
    Rank,
    CrewStatus,
    Vessel,
    DateOfBirth,
    PlaceOfBirth,
    Nationality,
    Religion,
    MaritalStatus,
    Address,
    Phone,
    Email,
    ReportedToOffice,
    ReportedToOfficeDate,
    InactiveReason,
    OffboardNotes,
    LastOffboardDate,
    CreatedAt,
    UpdatedAt,
}
