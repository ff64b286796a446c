use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffUser::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffUser::Id))
                    .col(string_uniq(StaffUser::Username))
                    .col(string(StaffUser::Email))
                    .col(string(StaffUser::PasswordHash))
                    .col(string(StaffUser::FullName))
                    .col(string(StaffUser::Role))
                    .col(boolean(StaffUser::IsActive).default(true))
                    .col(timestamp(StaffUser::CreatedAt))
                    .col(timestamp(StaffUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StaffUser {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FullName,
    Role,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
