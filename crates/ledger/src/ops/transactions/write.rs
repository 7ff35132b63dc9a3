use sea_orm::{DatabaseTransaction, prelude::*};

use crate::{ResultLedger, Transaction, transactions};

use super::super::Ledger;

mod create;
mod delete;
mod transfer;
mod update;

impl Ledger {
    /// Persists a fully built transaction row.
    ///
    /// The structural invariant check runs here, immediately before the
    /// insert, in addition to the check at construction time. Constructors
    /// cannot be bypassed, but the commit boundary stays the last line of
    /// defense.
    pub(super) async fn insert_transaction(
        &self,
        db_tx: &DatabaseTransaction,
        tx: &Transaction,
    ) -> ResultLedger<()> {
        tx.validate()?;
        transactions::ActiveModel::from(tx).insert(db_tx).await?;
        Ok(())
    }
}
