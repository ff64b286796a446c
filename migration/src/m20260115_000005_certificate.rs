use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260115_000004_crew::Crew;

static IDX_CERTIFICATE_CREW_ID: &str = "idx-certificate-crew_id";
static FK_CERTIFICATE_CREW_ID: &str = "fk-certificate-crew_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificate::Table)
                    .if_not_exists()
                    .col(pk_auto(Certificate::Id))
                    .col(integer(Certificate::CrewId))
                    .col(string(Certificate::Type))
                    .col(string_null(Certificate::CertificateNumber))
                    .col(date_null(Certificate::IssueDate))
                    .col(date_null(Certificate::ExpiryDate))
                    .col(string_null(Certificate::Issuer))
                    .col(string_null(Certificate::DocumentPath))
                    .col(text_null(Certificate::Remarks))
                    .col(timestamp(Certificate::CreatedAt))
                    .col(timestamp(Certificate::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CERTIFICATE_CREW_ID)
                    .table(Certificate::Table)
                    .col(Certificate::CrewId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CERTIFICATE_CREW_ID)
                    .from_tbl(Certificate::Table)
                    .from_col(Certificate::CrewId)
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
                    .name(FK_CERTIFICATE_CREW_ID)
                    .table(Certificate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CERTIFICATE_CREW_ID)
                    .table(Certificate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Certificate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Certificate {
    Table,
    Id,
    CrewId,
    Type,
    CertificateNumber,
    IssueDate,
    ExpiryDate,
    Issuer,
    DocumentPath,
    Remarks,
    CreatedAt,
    UpdatedAt,
}
