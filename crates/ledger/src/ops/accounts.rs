//! Account record management: user-scoped CRUD with soft delete.

use chrono::Utc;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{Account, AccountType, Currency, LedgerError, ResultLedger, accounts};

use super::{Ledger, normalize_required_text, with_tx};

impl Ledger {
    pub async fn create_account(
        &self,
        user_id: &str,
        name: &str,
        kind: AccountType,
        currency: Currency,
    ) -> ResultLedger<Account> {
        let name = normalize_required_text(name, "account name", 255)?;

        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, user_id).await?;

            let now = Utc::now();
            let account = Account {
                id: Uuid::new_v4(),
                user_id: user_id.to_string(),
                name,
                kind,
                currency,
                active: true,
                created_at: now,
                updated_at: now,
            };
            accounts::ActiveModel::from(&account).insert(&db_tx).await?;
            Ok(account)
        })
    }

    /// Lists a user's accounts; inactive (soft-deleted) ones only on request.
    pub async fn user_accounts(
        &self,
        user_id: &str,
        include_inactive: bool,
    ) -> ResultLedger<Vec<Account>> {
        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, user_id).await?;
            let mut query = accounts::Entity::find()
                .filter(accounts::Column::UserId.eq(user_id.to_string()))
                .order_by_asc(accounts::Column::CreatedAt);
            if !include_inactive {
                query = query.filter(accounts::Column::Active.eq(true));
            }
            let rows = query.all(&db_tx).await?;
            rows.into_iter().map(Account::try_from).collect()
        })
    }

    pub async fn account(&self, user_id: &str, account_id: Uuid) -> ResultLedger<Account> {
        with_tx!(self, |db_tx| {
            let model = self.require_account_owned(&db_tx, user_id, account_id).await?;
            Account::try_from(model)
        })
    }

    /// Partial update; only the name is mutable today. An empty patch is
    /// rejected rather than silently succeeding.
    pub async fn update_account(
        &self,
        user_id: &str,
        account_id: Uuid,
        name: Option<&str>,
    ) -> ResultLedger<Account> {
        let Some(name) = name else {
            return Err(LedgerError::InvalidRequest(
                "update requires at least one field".to_string(),
            ));
        };
        let name = normalize_required_text(name, "account name", 255)?;

        with_tx!(self, |db_tx| {
            let model = self.require_account_owned(&db_tx, user_id, account_id).await?;
            let mut account = Account::try_from(model)?;
            account.name = name;
            account.updated_at = Utc::now();

            let active_model = accounts::ActiveModel {
                id: ActiveValue::Set(account.id.to_string()),
                name: ActiveValue::Set(account.name.clone()),
                updated_at: ActiveValue::Set(account.updated_at),
                ..Default::default()
            };
            active_model.update(&db_tx).await?;
            Ok(account)
        })
    }

    /// Soft-deletes an account (`active = false`).
    ///
    /// Transactions referencing the account are kept; the account simply
    /// stops resolving for new writes.
    pub async fn deactivate_account(&self, user_id: &str, account_id: Uuid) -> ResultLedger<()> {
        with_tx!(self, |db_tx| {
            let model = self.require_account_owned(&db_tx, user_id, account_id).await?;
            let active_model = accounts::ActiveModel {
                id: ActiveValue::Set(model.id),
                active: ActiveValue::Set(false),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            };
            active_model.update(&db_tx).await?;
            Ok(())
        })
    }
}
