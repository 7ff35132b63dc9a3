use sea_orm_migration::prelude::*;

use crate::m20260210_090000_users::Users;
use crate::m20260210_091000_accounts::Accounts;
use crate::m20260210_092000_categories::Categories;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    UserId,
    AccountId,
    CategoryId,
    Kind,
    TransferDirection,
    TransferGroupId,
    AmountMinor,
    Currency,
    TransactionDate,
    Description,
    FxRateMicros,
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
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::UserId).string().not_null())
                    .col(ColumnDef::new(Transactions::AccountId).string().not_null())
                    .col(ColumnDef::new(Transactions::CategoryId).string())
                    .col(ColumnDef::new(Transactions::Kind).string().not_null())
                    .col(ColumnDef::new(Transactions::TransferDirection).string())
                    .col(ColumnDef::new(Transactions::TransferGroupId).string())
                    .col(
                        ColumnDef::new(Transactions::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::Currency).string().not_null())
                    .col(
                        ColumnDef::new(Transactions::TransactionDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::Description)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Transactions::FxRateMicros).big_integer())
                    .col(ColumnDef::new(Transactions::Notes).string())
                    .col(
                        ColumnDef::new(Transactions::CreatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Transactions::UpdatedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-user_id")
                            .from(Transactions::Table, Transactions::UserId)
                            .to(Users::Table, Users::Username),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-account_id")
                            .from(Transactions::Table, Transactions::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transactions-category_id")
                            .from(Transactions::Table, Transactions::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-user_id-transaction_date")
                    .table(Transactions::Table)
                    .col(Transactions::UserId)
                    .col(Transactions::TransactionDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-account_id")
                    .table(Transactions::Table)
                    .col(Transactions::AccountId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-category_id")
                    .table(Transactions::Table)
                    .col(Transactions::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-kind")
                    .table(Transactions::Table)
                    .col(Transactions::Kind)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-transactions-transfer_group_id")
                    .table(Transactions::Table)
                    .col(Transactions::TransferGroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await
    }
}
