use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{
    LedgerError, ResultLedger, Transaction, Transfer, TransferDirection, transactions,
};

use super::super::{Ledger, with_tx};

/// Every multi-row read returns the user-facing recency ordering:
/// `transaction_date DESC`, ties broken by insertion order (`created_at ASC`).
fn collect_ordered(rows: Vec<transactions::Model>) -> ResultLedger<Vec<Transaction>> {
    let mut out = Vec::with_capacity(rows.len());
    for model in rows {
        out.push(Transaction::try_from(model)?);
    }
    Ok(out)
}

impl Ledger {
    /// Returns a single transaction owned by `user_id`.
    pub async fn transaction(
        &self,
        user_id: &str,
        transaction_id: Uuid,
    ) -> ResultLedger<Transaction> {
        with_tx!(self, |db_tx| {
            let model = self
                .find_transaction_owned(&db_tx, user_id, transaction_id)
                .await?;
            Transaction::try_from(model)
        })
    }

    /// Lists every transaction for a user, newest date first.
    pub async fn user_transactions(&self, user_id: &str) -> ResultLedger<Vec<Transaction>> {
        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, user_id).await?;
            let rows = transactions::Entity::find()
                .filter(transactions::Column::UserId.eq(user_id.to_string()))
                .order_by_desc(transactions::Column::TransactionDate)
                .order_by_asc(transactions::Column::CreatedAt)
                .all(&db_tx)
                .await?;
            collect_ordered(rows)
        })
    }

    /// Lists transactions for one account, newest date first.
    ///
    /// Account ownership is verified through the account resolver before the
    /// rows are read.
    pub async fn account_transactions(
        &self,
        user_id: &str,
        account_id: Uuid,
    ) -> ResultLedger<Vec<Transaction>> {
        with_tx!(self, |db_tx| {
            self.require_account_owned(&db_tx, user_id, account_id)
                .await?;
            let rows = transactions::Entity::find()
                .filter(transactions::Column::AccountId.eq(account_id.to_string()))
                .order_by_desc(transactions::Column::TransactionDate)
                .order_by_asc(transactions::Column::CreatedAt)
                .all(&db_tx)
                .await?;
            collect_ordered(rows)
        })
    }

    /// Returns both legs of a transfer group, labeled outgoing/incoming.
    ///
    /// A group with anything other than exactly one `Out` and one `In` leg
    /// indicates a corrupted store and surfaces as `InvariantViolation`.
    pub async fn transfer_legs(
        &self,
        user_id: &str,
        transfer_group_id: Uuid,
    ) -> ResultLedger<Transfer> {
        with_tx!(self, |db_tx| {
            let rows = transactions::Entity::find()
                .filter(transactions::Column::UserId.eq(user_id.to_string()))
                .filter(
                    transactions::Column::TransferGroupId.eq(transfer_group_id.to_string()),
                )
                .all(&db_tx)
                .await?;
            if rows.is_empty() {
                return Err(LedgerError::NotFound("transfer not exists".to_string()));
            }

            let mut outgoing = None;
            let mut incoming = None;
            let leg_count = rows.len();
            for model in rows {
                let tx = Transaction::try_from(model)?;
                match tx.transfer_direction {
                    Some(TransferDirection::Out) => outgoing = Some(tx),
                    Some(TransferDirection::In) => incoming = Some(tx),
                    None => {
                        return Err(LedgerError::InvariantViolation(
                            "transfer leg without a direction".to_string(),
                        ));
                    }
                }
            }
            match (outgoing, incoming) {
                (Some(outgoing), Some(incoming)) if leg_count == 2 => Ok(Transfer {
                    transfer_group_id,
                    outgoing,
                    incoming,
                }),
                _ => Err(LedgerError::InvariantViolation(format!(
                    "transfer group {transfer_group_id} does not have exactly one out and one in leg"
                ))),
            }
        })
    }
}
