use chrono::Utc;
use sea_orm::TransactionTrait;
use uuid::Uuid;

use crate::{
    CreateTransferCmd, LedgerError, ResultLedger, Transaction, Transfer, TransferDirection,
    transactions::TransactionParts,
};

use super::super::super::{Ledger, normalize_optional_text, normalize_required_text, with_tx};

impl Ledger {
    /// Creates a transfer between two accounts.
    ///
    /// Two rows are built with an identical payload and a fresh shared
    /// `transfer_group_id`: the `Out` leg on the source account and the `In`
    /// leg on the destination account. Both inserts run inside one DB
    /// transaction, so either both legs exist afterwards or neither does.
    pub async fn create_transfer(&self, cmd: CreateTransferCmd) -> ResultLedger<Transfer> {
        if cmd.from_account_id == cmd.to_account_id {
            return Err(LedgerError::InvalidRequest(
                "from_account_id and to_account_id must differ".to_string(),
            ));
        }
        let description = normalize_required_text(&cmd.description, "description", 500)?;
        let notes = normalize_optional_text(cmd.notes.as_deref());

        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, &cmd.user_id).await?;
            self.require_account_owned(&db_tx, &cmd.user_id, cmd.from_account_id)
                .await?;
            self.require_account_owned(&db_tx, &cmd.user_id, cmd.to_account_id)
                .await?;

            let transfer_group_id = Uuid::new_v4();
            let now = Utc::now();
            let parts = |account_id: Uuid| TransactionParts {
                user_id: cmd.user_id.clone(),
                account_id,
                category_id: None,
                amount_minor: cmd.amount_minor,
                currency: cmd.currency,
                transaction_date: cmd.transfer_date,
                description: description.clone(),
                fx_rate_micros: cmd.fx_rate_micros,
                notes: notes.clone(),
            };

            let outgoing = Transaction::transfer_leg(
                TransferDirection::Out,
                transfer_group_id,
                parts(cmd.from_account_id),
                now,
            )?;
            let incoming = Transaction::transfer_leg(
                TransferDirection::In,
                transfer_group_id,
                parts(cmd.to_account_id),
                now,
            )?;

            self.insert_transaction(&db_tx, &outgoing).await?;
            self.insert_transaction(&db_tx, &incoming).await?;

            Ok(Transfer {
                transfer_group_id,
                outgoing,
                incoming,
            })
        })
    }
}
