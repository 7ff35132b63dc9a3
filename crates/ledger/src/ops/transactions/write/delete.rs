use sea_orm::{QueryFilter, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{LedgerError, ResultLedger, Transaction, transactions};

use super::super::super::{Ledger, with_tx};

impl Ledger {
    /// Hard-deletes a transaction.
    ///
    /// For a transfer leg, every row sharing its `transfer_group_id` is
    /// removed in the same DB transaction, so the pairing invariant holds
    /// under deletion too: an orphan leg can never remain.
    pub async fn delete_transaction(
        &self,
        user_id: &str,
        transaction_id: Uuid,
    ) -> ResultLedger<()> {
        with_tx!(self, |db_tx| {
            let model = self
                .find_transaction_owned(&db_tx, user_id, transaction_id)
                .await?;
            let tx = Transaction::try_from(model)?;

            if tx.is_transfer() {
                let group_id = tx.transfer_group_id.ok_or_else(|| {
                    LedgerError::InvariantViolation(
                        "transfer transaction without a group id".to_string(),
                    )
                })?;
                transactions::Entity::delete_many()
                    .filter(transactions::Column::UserId.eq(user_id.to_string()))
                    .filter(transactions::Column::TransferGroupId.eq(group_id.to_string()))
                    .exec(&db_tx)
                    .await?;
            } else {
                transactions::Entity::delete_by_id(tx.id.to_string())
                    .exec(&db_tx)
                    .await?;
            }
            Ok(())
        })
    }
}
