use sea_orm_migration::prelude::*;

use crate::m20260210_090000_users::Users;
use crate::m20260210_091000_accounts::Accounts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Allocations {
    Table,
    Id,
    UserId,
    AccountId,
    ContainerType,
    Name,
    AmountMinor,
    Currency,
    StartDate,
    MaturityDate,
    Status,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Allocations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Allocations::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Allocations::UserId).string().not_null())
                    .col(ColumnDef::new(Allocations::AccountId).string())
                    .col(
                        ColumnDef::new(Allocations::ContainerType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Allocations::Name).string().not_null())
                    .col(
                        ColumnDef::new(Allocations::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Allocations::Currency).string().not_null())
                    .col(ColumnDef::new(Allocations::StartDate).date().not_null())
                    .col(ColumnDef::new(Allocations::MaturityDate).date())
                    .col(ColumnDef::new(Allocations::Status).string().not_null())
                    .col(ColumnDef::new(Allocations::Notes).string())
                    .col(
                        ColumnDef::new(Allocations::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Allocations::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-allocations-user_id")
                            .from(Allocations::Table, Allocations::UserId)
                            .to(Users::Table, Users::Username),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-allocations-account_id")
                            .from(Allocations::Table, Allocations::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-allocations-user_id")
                    .table(Allocations::Table)
                    .col(Allocations::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Allocations::Table).to_owned())
            .await
    }
}
