use chrono::Utc;
use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{
    Amount, FxRate, LedgerError, ResultLedger, Transaction, UpdateTransactionCmd, transactions,
};

use super::super::super::{Ledger, normalize_optional_text, normalize_required_text, with_tx};

impl Ledger {
    /// Applies a partial patch to a non-transfer transaction.
    ///
    /// A field left absent keeps its current value. Kind, transfer direction,
    /// transfer group, currency, account and owner never change; transfer
    /// legs are rejected outright, since editing one leg in place would break
    /// the pairing with its sibling.
    pub async fn update_transaction(
        &self,
        cmd: UpdateTransactionCmd,
    ) -> ResultLedger<Transaction> {
        if cmd.is_empty() {
            return Err(LedgerError::InvalidRequest(
                "update requires at least one field".to_string(),
            ));
        }

        with_tx!(self, |db_tx| {
            let model = self
                .find_transaction_owned(&db_tx, &cmd.user_id, cmd.transaction_id)
                .await?;
            let current = Transaction::try_from(model)?;
            if current.is_transfer() {
                return Err(LedgerError::InvalidRequest(
                    "transfer legs cannot be updated in place; delete and recreate the transfer"
                        .to_string(),
                ));
            }

            let category_id = match cmd.category_id {
                Some(category_id) => {
                    self.require_category_owned(&db_tx, &cmd.user_id, category_id)
                        .await?;
                    Some(category_id)
                }
                None => current.category_id,
            };
            let amount_minor = match cmd.amount_minor {
                Some(minor) => Amount::from_minor(minor)?.minor(),
                None => current.amount_minor,
            };
            let transaction_date = cmd.transaction_date.unwrap_or(current.transaction_date);
            let description = match cmd.description.as_deref() {
                Some(description) => normalize_required_text(description, "description", 500)?,
                None => current.description.clone(),
            };
            let fx_rate_micros = match cmd.fx_rate_micros {
                Some(micros) => Some(FxRate::from_micros(micros)?.micros()),
                None => current.fx_rate_micros,
            };
            let notes = match cmd.notes.as_deref() {
                Some(notes) => normalize_optional_text(Some(notes)),
                None => current.notes.clone(),
            };

            let updated = Transaction {
                category_id,
                amount_minor,
                transaction_date,
                description,
                fx_rate_micros,
                notes,
                updated_at: Utc::now(),
                ..current
            };
            updated.validate()?;

            let tx_active = transactions::ActiveModel {
                id: ActiveValue::Set(updated.id.to_string()),
                category_id: ActiveValue::Set(updated.category_id.map(|id| id.to_string())),
                amount_minor: ActiveValue::Set(updated.amount_minor),
                transaction_date: ActiveValue::Set(updated.transaction_date),
                description: ActiveValue::Set(updated.description.clone()),
                fx_rate_micros: ActiveValue::Set(updated.fx_rate_micros),
                notes: ActiveValue::Set(updated.notes.clone()),
                updated_at: ActiveValue::Set(updated.updated_at),
                ..Default::default()
            };
            tx_active.update(&db_tx).await?;

            Ok(updated)
        })
    }
}
