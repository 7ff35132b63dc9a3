use chrono::Utc;
use sea_orm::TransactionTrait;

use crate::{
    CreateTransactionCmd, LedgerError, ResultLedger, Transaction, TransactionType,
    transactions::TransactionParts,
};

use super::super::super::{Ledger, normalize_optional_text, normalize_required_text, with_tx};

impl Ledger {
    /// Creates a standalone transaction (income, expense or adjustment).
    ///
    /// Transfers are rejected here: they touch two accounts and must go
    /// through [`Ledger::create_transfer`] so the two legs stay paired.
    pub async fn create_transaction(
        &self,
        cmd: CreateTransactionCmd,
    ) -> ResultLedger<Transaction> {
        if cmd.kind == TransactionType::Transfer {
            return Err(LedgerError::InvalidRequest(
                "use create_transfer for transfer transactions".to_string(),
            ));
        }
        let description = normalize_required_text(&cmd.description, "description", 500)?;
        let notes = normalize_optional_text(cmd.notes.as_deref());

        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, &cmd.user_id).await?;
            self.require_account_owned(&db_tx, &cmd.user_id, cmd.account_id)
                .await?;
            if let Some(category_id) = cmd.category_id {
                self.require_category_owned(&db_tx, &cmd.user_id, category_id)
                    .await?;
            }

            let tx = Transaction::standalone(
                cmd.kind,
                TransactionParts {
                    user_id: cmd.user_id.clone(),
                    account_id: cmd.account_id,
                    category_id: cmd.category_id,
                    amount_minor: cmd.amount_minor,
                    currency: cmd.currency,
                    transaction_date: cmd.transaction_date,
                    description,
                    fx_rate_micros: cmd.fx_rate_micros,
                    notes,
                },
                Utc::now(),
            )?;
            self.insert_transaction(&db_tx, &tx).await?;
            Ok(tx)
        })
    }
}
