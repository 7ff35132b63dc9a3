//! Dashboard aggregation: a read-only fold over current state.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use sea_orm::{QueryFilter, TransactionTrait, prelude::*};

use crate::{Currency, LedgerError, ResultLedger, TransactionType, allocations, transactions};

use super::{Ledger, with_tx};

/// Immutable snapshot of the summary figures.
///
/// All values are minor units. `total_liquid_minor` is currently always zero:
/// accounts carry no stored balance and per-account derivation from the
/// transaction stream is not implemented yet (see DESIGN.md).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_wealth_minor: i64,
    pub total_liquid_minor: i64,
    pub total_allocated_minor: i64,
    /// Raw per-currency allocation sums; `fx_rate_micros` is not applied.
    pub wealth_by_currency: HashMap<Currency, i64>,
    pub monthly_income_minor: i64,
    pub monthly_expense_minor: i64,
    pub monthly_savings_minor: i64,
}

impl Ledger {
    /// Computes the dashboard snapshot for a user.
    ///
    /// `today` is the reference date for the monthly window (everything dated
    /// on or after the first calendar day of `today`'s month). Callers pass
    /// the current date; tests pass a fixed one, which keeps the month
    /// boundary deterministic.
    pub async fn dashboard(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> ResultLedger<DashboardSummary> {
        let first_of_month = today.with_day(1).ok_or_else(|| {
            LedgerError::InvalidRequest("invalid reference date".to_string())
        })?;

        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, user_id).await?;

            let monthly_rows = transactions::Entity::find()
                .filter(transactions::Column::UserId.eq(user_id.to_string()))
                .filter(transactions::Column::TransactionDate.gte(first_of_month))
                .all(&db_tx)
                .await?;

            let mut monthly_income_minor = 0i64;
            let mut monthly_expense_minor = 0i64;
            for model in monthly_rows {
                let kind = TransactionType::try_from(model.kind.as_str())?;
                match kind {
                    TransactionType::Income => monthly_income_minor += model.amount_minor,
                    TransactionType::Expense => monthly_expense_minor += model.amount_minor,
                    // Transfers are zero-sum and adjustments are corrections;
                    // neither feeds the income/expense figures.
                    TransactionType::Transfer | TransactionType::Adjustment => {}
                }
            }

            let allocation_rows = allocations::Entity::find()
                .filter(allocations::Column::UserId.eq(user_id.to_string()))
                .all(&db_tx)
                .await?;

            let mut total_allocated_minor = 0i64;
            let mut wealth_by_currency: HashMap<Currency, i64> = HashMap::new();
            for model in allocation_rows {
                let currency = Currency::try_from(model.currency.as_str())?;
                total_allocated_minor += model.amount_minor;
                *wealth_by_currency.entry(currency).or_insert(0) += model.amount_minor;
            }

            // Account balances are not persisted and not derived yet.
            let total_liquid_minor = 0i64;

            Ok(DashboardSummary {
                total_wealth_minor: total_liquid_minor + total_allocated_minor,
                total_liquid_minor,
                total_allocated_minor,
                wealth_by_currency,
                monthly_income_minor,
                monthly_expense_minor,
                monthly_savings_minor: monthly_income_minor - monthly_expense_minor,
            })
        })
    }
}
