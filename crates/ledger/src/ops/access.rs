//! Ownership resolvers.
//!
//! Every lookup combines the existence check and the ownership check into a
//! single `NotFound` failure, so callers can never distinguish "missing" from
//! "owned by someone else".

use sea_orm::{DatabaseTransaction, QueryFilter, prelude::*};
use uuid::Uuid;

use crate::{LedgerError, ResultLedger, accounts, allocations, categories, transactions, users};

use super::Ledger;

impl Ledger {
    pub(super) async fn require_user_exists(
        &self,
        db: &DatabaseTransaction,
        username: &str,
    ) -> ResultLedger<()> {
        let exists = users::Entity::find_by_id(username.to_string())
            .one(db)
            .await?
            .is_some();
        if !exists {
            return Err(LedgerError::NotFound("user not exists".to_string()));
        }
        Ok(())
    }

    /// Resolves an **active** account owned by `user_id`.
    pub(super) async fn require_account_owned(
        &self,
        db: &DatabaseTransaction,
        user_id: &str,
        account_id: Uuid,
    ) -> ResultLedger<accounts::Model> {
        accounts::Entity::find_by_id(account_id.to_string())
            .filter(accounts::Column::UserId.eq(user_id.to_string()))
            .filter(accounts::Column::Active.eq(true))
            .one(db)
            .await?
            .ok_or_else(|| LedgerError::NotFound("account not exists".to_string()))
    }

    /// Resolves an **active** category owned by `user_id`.
    pub(super) async fn require_category_owned(
        &self,
        db: &DatabaseTransaction,
        user_id: &str,
        category_id: Uuid,
    ) -> ResultLedger<categories::Model> {
        categories::Entity::find_by_id(category_id.to_string())
            .filter(categories::Column::UserId.eq(user_id.to_string()))
            .filter(categories::Column::Active.eq(true))
            .one(db)
            .await?
            .ok_or_else(|| LedgerError::NotFound("category not exists".to_string()))
    }

    pub(super) async fn find_transaction_owned(
        &self,
        db: &DatabaseTransaction,
        user_id: &str,
        transaction_id: Uuid,
    ) -> ResultLedger<transactions::Model> {
        transactions::Entity::find_by_id(transaction_id.to_string())
            .filter(transactions::Column::UserId.eq(user_id.to_string()))
            .one(db)
            .await?
            .ok_or_else(|| LedgerError::NotFound("transaction not exists".to_string()))
    }

    pub(super) async fn find_allocation_owned(
        &self,
        db: &DatabaseTransaction,
        user_id: &str,
        allocation_id: Uuid,
    ) -> ResultLedger<allocations::Model> {
        allocations::Entity::find_by_id(allocation_id.to_string())
            .filter(allocations::Column::UserId.eq(user_id.to_string()))
            .one(db)
            .await?
            .ok_or_else(|| LedgerError::NotFound("allocation not exists".to_string()))
    }
}
