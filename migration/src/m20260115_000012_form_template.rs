use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(FormTemplate::Id))
                    .col(string_uniq(FormTemplate::Code))
                    .col(string(FormTemplate::Title))
                    .col(string(FormTemplate::Category))
                    .col(integer(FormTemplate::Pages).default(1))
                    .col(text(FormTemplate::Fields))
                    .col(timestamp(FormTemplate::CreatedAt))
                    .col(timestamp(FormTemplate::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormTemplate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FormTemplate {
    Table,
    Id,
    Code,
    Title,
    Category,
    Pages,
    Fields,
    CreatedAt,
    UpdatedAt,
}
