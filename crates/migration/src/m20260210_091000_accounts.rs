use sea_orm_migration::prelude::*;

use crate::m20260210_090000_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Accounts {
    Table,
    Id,
    UserId,
    Name,
    Kind,
    Currency,
    Active,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Accounts::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Accounts::UserId).string().not_null())
                    .col(ColumnDef::new(Accounts::Name).string().not_null())
                    .col(ColumnDef::new(Accounts::Kind).string().not_null())
                    .col(ColumnDef::new(Accounts::Currency).string().not_null())
                    .col(
                        ColumnDef::new(Accounts::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Accounts::CreatedAt).timestamp().not_null())
                    .col(ColumnDef::new(Accounts::UpdatedAt).timestamp().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-accounts-user_id")
                            .from(Accounts::Table, Accounts::UserId)
                            .to(Users::Table, Users::Username),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-accounts-user_id")
                    .table(Accounts::Table)
                    .col(Accounts::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accounts::Table).to_owned())
            .await
    }
}
