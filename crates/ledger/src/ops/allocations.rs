//! Allocation record management.
//!
//! Unlike accounts and categories, allocations are hard-deleted: they are
//! standalone pools with no transactions pointing at them.

use chrono::Utc;
use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    Allocation, AllocationStatus, Amount, ContainerType, CreateAllocationCmd, LedgerError,
    ResultLedger, allocations,
};

use super::{Ledger, normalize_optional_text, normalize_required_text, with_tx};

impl Ledger {
    pub async fn create_allocation(&self, cmd: CreateAllocationCmd) -> ResultLedger<Allocation> {
        if cmd.container_type == ContainerType::AccountBased && cmd.account_id.is_none() {
            return Err(LedgerError::InvalidRequest(
                "account id is required for account_based allocations".to_string(),
            ));
        }
        let name = normalize_required_text(&cmd.name, "allocation name", 255)?;
        let notes = normalize_optional_text(cmd.notes.as_deref());
        let amount_minor = Amount::from_minor(cmd.amount_minor)?.minor();

        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, &cmd.user_id).await?;
            if let Some(account_id) = cmd.account_id {
                self.require_account_owned(&db_tx, &cmd.user_id, account_id)
                    .await?;
            }

            let now = Utc::now();
            let allocation = Allocation {
                id: Uuid::new_v4(),
                user_id: cmd.user_id.clone(),
                account_id: cmd.account_id,
                container_type: cmd.container_type,
                name,
                amount_minor,
                currency: cmd.currency,
                start_date: cmd.start_date,
                maturity_date: cmd.maturity_date,
                status: AllocationStatus::Active,
                notes,
                created_at: now,
                updated_at: now,
            };
            allocations::ActiveModel::from(&allocation)
                .insert(&db_tx)
                .await?;
            Ok(allocation)
        })
    }

    pub async fn user_allocations(&self, user_id: &str) -> ResultLedger<Vec<Allocation>> {
        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, user_id).await?;
            let rows = allocations::Entity::find()
                .filter(allocations::Column::UserId.eq(user_id.to_string()))
                .order_by_asc(allocations::Column::CreatedAt)
                .all(&db_tx)
                .await?;
            rows.into_iter().map(Allocation::try_from).collect()
        })
    }

    pub async fn delete_allocation(&self, user_id: &str, allocation_id: Uuid) -> ResultLedger<()> {
        with_tx!(self, |db_tx| {
            let model = self
                .find_allocation_owned(&db_tx, user_id, allocation_id)
                .await?;
            allocations::Entity::delete_by_id(model.id)
                .exec(&db_tx)
                .await?;
            Ok(())
        })
    }
}
