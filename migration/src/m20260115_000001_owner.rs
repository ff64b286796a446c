use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Owner::Table)
                    .if_not_exists()
                    .col(pk_auto(Owner::Id))
                    .col(string(Owner::Name))
                    .col(string_null(Owner::Code))
                    .col(string_null(Owner::Country))
                    .col(string_null(Owner::Contact))
                    .col(string_null(Owner::Email))
                    .col(text_null(Owner::Notes))
                    .col(integer(Owner::ContractMonths).default(7))
                    .col(timestamp(Owner::CreatedAt))
                    .col(timestamp(Owner::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Owner::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Owner {
    Table,
    Id,
    Name,
    Code,
    Country,
    Contact,
    Email,
    Notes,
    ContractMonths,
    CreatedAt,
    UpdatedAt,
}
