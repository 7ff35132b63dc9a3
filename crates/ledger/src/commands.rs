//! Command structs for ledger operations.
//!
//! These types group parameters for write operations (create/transfer/update),
//! keeping call sites readable and avoiding long argument lists.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::{ContainerType, Currency, TransactionType};

/// Create a standalone transaction (income, expense or adjustment).
#[derive(Clone, Debug)]
pub struct CreateTransactionCmd {
    pub user_id: String,
    pub account_id: Uuid,
    pub category_id: Option<Uuid>,
    pub kind: TransactionType,
    pub amount_minor: i64,
    pub currency: Currency,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub fx_rate_micros: Option<i64>,
    pub notes: Option<String>,
}

impl CreateTransactionCmd {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        account_id: Uuid,
        kind: TransactionType,
        amount_minor: i64,
        currency: Currency,
        transaction_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            account_id,
            category_id: None,
            kind,
            amount_minor,
            currency,
            transaction_date,
            description: description.into(),
            fx_rate_micros: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn category_id(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn fx_rate_micros(mut self, fx_rate_micros: i64) -> Self {
        self.fx_rate_micros = Some(fx_rate_micros);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Create a transfer: two linked legs moving an amount between two accounts.
#[derive(Clone, Debug)]
pub struct CreateTransferCmd {
    pub user_id: String,
    pub from_account_id: Uuid,
    pub to_account_id: Uuid,
    pub amount_minor: i64,
    pub currency: Currency,
    pub transfer_date: NaiveDate,
    pub description: String,
    pub fx_rate_micros: Option<i64>,
    pub notes: Option<String>,
}

impl CreateTransferCmd {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        from_account_id: Uuid,
        to_account_id: Uuid,
        amount_minor: i64,
        currency: Currency,
        transfer_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            from_account_id,
            to_account_id,
            amount_minor,
            currency,
            transfer_date,
            description: description.into(),
            fx_rate_micros: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn fx_rate_micros(mut self, fx_rate_micros: i64) -> Self {
        self.fx_rate_micros = Some(fx_rate_micros);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Patch an existing non-transfer transaction.
///
/// A field that is `None` is left untouched; a patch with every field absent
/// is rejected instead of silently succeeding. Kind, direction, group id,
/// currency, account and owner are immutable regardless of the patch.
#[derive(Clone, Debug)]
pub struct UpdateTransactionCmd {
    pub user_id: String,
    pub transaction_id: Uuid,

    pub category_id: Option<Uuid>,
    pub amount_minor: Option<i64>,
    pub transaction_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub fx_rate_micros: Option<i64>,
    pub notes: Option<String>,
}

impl UpdateTransactionCmd {
    #[must_use]
    pub fn new(user_id: impl Into<String>, transaction_id: Uuid) -> Self {
        Self {
            user_id: user_id.into(),
            transaction_id,
            category_id: None,
            amount_minor: None,
            transaction_date: None,
            description: None,
            fx_rate_micros: None,
            notes: None,
        }
    }

    /// True when no recognized field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.amount_minor.is_none()
            && self.transaction_date.is_none()
            && self.description.is_none()
            && self.fx_rate_micros.is_none()
            && self.notes.is_none()
    }

    #[must_use]
    pub fn category_id(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn amount_minor(mut self, amount_minor: i64) -> Self {
        self.amount_minor = Some(amount_minor);
        self
    }

    #[must_use]
    pub fn transaction_date(mut self, transaction_date: NaiveDate) -> Self {
        self.transaction_date = Some(transaction_date);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn fx_rate_micros(mut self, fx_rate_micros: i64) -> Self {
        self.fx_rate_micros = Some(fx_rate_micros);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Create an allocation (a committed pool of funds).
#[derive(Clone, Debug)]
pub struct CreateAllocationCmd {
    pub user_id: String,
    pub account_id: Option<Uuid>,
    pub container_type: ContainerType,
    pub name: String,
    pub amount_minor: i64,
    pub currency: Currency,
    pub start_date: NaiveDate,
    pub maturity_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl CreateAllocationCmd {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        container_type: ContainerType,
        name: impl Into<String>,
        amount_minor: i64,
        currency: Currency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            account_id: None,
            container_type,
            name: name.into(),
            amount_minor,
            currency,
            start_date,
            maturity_date: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn account_id(mut self, account_id: Uuid) -> Self {
        self.account_id = Some(account_id);
        self
    }

    #[must_use]
    pub fn maturity_date(mut self, maturity_date: NaiveDate) -> Self {
        self.maturity_date = Some(maturity_date);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
