//! Transaction primitives.
//!
//! A `Transaction` is an atomic ledger event against a single account. A
//! transfer between two accounts is stored as **two** transactions (one
//! `Out`, one `In`) linked by a shared `transfer_group_id`; the two rows are
//! always created together and deleted together.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Amount, Currency, FxRate, LedgerError, ResultLedger};
use crate::util::{parse_optional_uuid, parse_uuid};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
    Adjustment,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Transfer => "transfer",
            Self::Adjustment => "adjustment",
        }
    }

    /// True for the kinds that feed the income/expense report figures.
    ///
    /// Transfers are zero-sum within the owner's wealth and adjustments are
    /// corrections, not flows; both are excluded.
    #[must_use]
    pub fn affects_reports(self) -> bool {
        matches!(self, Self::Income | Self::Expense)
    }
}

impl TryFrom<&str> for TransactionType {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            "transfer" => Ok(Self::Transfer),
            "adjustment" => Ok(Self::Adjustment),
            other => Err(LedgerError::InvalidRequest(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

/// Direction of a transfer leg, present only on `Transfer` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferDirection {
    Out,
    In,
}

impl TransferDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Out => "out",
            Self::In => "in",
        }
    }

    /// The direction of the sibling leg.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Out => Self::In,
            Self::In => Self::Out,
        }
    }
}

impl TryFrom<&str> for TransferDirection {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "out" => Ok(Self::Out),
            "in" => Ok(Self::In),
            other => Err(LedgerError::InvalidRequest(format!(
                "invalid transfer direction: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: String,
    pub account_id: Uuid,
    pub category_id: Option<Uuid>,
    pub kind: TransactionType,
    pub transfer_direction: Option<TransferDirection>,
    pub transfer_group_id: Option<Uuid>,
    pub amount_minor: i64,
    pub currency: Currency,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub fx_rate_micros: Option<i64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Arguments shared by every transaction constructor.
#[derive(Clone, Debug)]
pub(crate) struct TransactionParts {
    pub user_id: String,
    pub account_id: Uuid,
    pub category_id: Option<Uuid>,
    pub amount_minor: i64,
    pub currency: Currency,
    pub transaction_date: NaiveDate,
    pub description: String,
    pub fx_rate_micros: Option<i64>,
    pub notes: Option<String>,
}

impl Transaction {
    /// Builds a standalone (non-transfer) transaction.
    pub(crate) fn standalone(
        kind: TransactionType,
        parts: TransactionParts,
        now: DateTime<Utc>,
    ) -> ResultLedger<Self> {
        Self::build(kind, None, None, parts, now)
    }

    /// Builds one leg of a transfer group.
    pub(crate) fn transfer_leg(
        direction: TransferDirection,
        transfer_group_id: Uuid,
        parts: TransactionParts,
        now: DateTime<Utc>,
    ) -> ResultLedger<Self> {
        Self::build(
            TransactionType::Transfer,
            Some(direction),
            Some(transfer_group_id),
            parts,
            now,
        )
    }

    fn build(
        kind: TransactionType,
        transfer_direction: Option<TransferDirection>,
        transfer_group_id: Option<Uuid>,
        parts: TransactionParts,
        now: DateTime<Utc>,
    ) -> ResultLedger<Self> {
        let amount_minor = Amount::from_minor(parts.amount_minor)?.minor();
        let fx_rate_micros = parts
            .fx_rate_micros
            .map(FxRate::from_micros)
            .transpose()?
            .map(FxRate::micros);

        let tx = Self {
            id: Uuid::new_v4(),
            user_id: parts.user_id,
            account_id: parts.account_id,
            category_id: parts.category_id,
            kind,
            transfer_direction,
            transfer_group_id,
            amount_minor,
            currency: parts.currency,
            transaction_date: parts.transaction_date,
            description: parts.description,
            fx_rate_micros,
            notes: parts.notes,
            created_at: now,
            updated_at: now,
        };
        tx.validate()?;
        Ok(tx)
    }

    /// True when this row is one leg of a transfer group.
    #[must_use]
    pub fn is_transfer(&self) -> bool {
        self.kind == TransactionType::Transfer
    }

    /// True when the row feeds income/expense report figures.
    #[must_use]
    pub fn affects_reports(&self) -> bool {
        self.kind.affects_reports()
    }

    /// Checks the structural transfer invariant:
    /// `kind == Transfer` ⇔ (direction set AND group id set).
    ///
    /// This runs on every construction, every patch application and every
    /// read-back from storage, so a corrupted row can never flow silently
    /// through a new code path.
    pub fn validate(&self) -> ResultLedger<()> {
        if self.kind == TransactionType::Transfer {
            if self.transfer_direction.is_none() {
                return Err(LedgerError::InvariantViolation(
                    "transfer transaction without a direction".to_string(),
                ));
            }
            if self.transfer_group_id.is_none() {
                return Err(LedgerError::InvariantViolation(
                    "transfer transaction without a group id".to_string(),
                ));
            }
        } else if self.transfer_direction.is_some() || self.transfer_group_id.is_some() {
            return Err(LedgerError::InvariantViolation(
                "direction and group id must be absent on non-transfer transactions".to_string(),
            ));
        }
        Ok(())
    }
}

/// Both legs of a transfer group, labeled by direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub transfer_group_id: Uuid,
    pub outgoing: Transaction,
    pub incoming: Transaction,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub account_id: String,
    pub category_id: Option<String>,
    pub kind: String,
    pub transfer_direction: Option<String>,
    pub transfer_group_id: Option<String>,
    pub amount_minor: i64,
    pub currency: String,
    pub transaction_date: Date,
    pub description: String,
    pub fx_rate_micros: Option<i64>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id.to_string()),
            user_id: ActiveValue::Set(tx.user_id.clone()),
            account_id: ActiveValue::Set(tx.account_id.to_string()),
            category_id: ActiveValue::Set(tx.category_id.map(|id| id.to_string())),
            kind: ActiveValue::Set(tx.kind.as_str().to_string()),
            transfer_direction: ActiveValue::Set(
                tx.transfer_direction.map(|d| d.as_str().to_string()),
            ),
            transfer_group_id: ActiveValue::Set(tx.transfer_group_id.map(|id| id.to_string())),
            amount_minor: ActiveValue::Set(tx.amount_minor),
            currency: ActiveValue::Set(tx.currency.code().to_string()),
            transaction_date: ActiveValue::Set(tx.transaction_date),
            description: ActiveValue::Set(tx.description.clone()),
            fx_rate_micros: ActiveValue::Set(tx.fx_rate_micros),
            notes: ActiveValue::Set(tx.notes.clone()),
            created_at: ActiveValue::Set(tx.created_at),
            updated_at: ActiveValue::Set(tx.updated_at),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = LedgerError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let transfer_direction = model
            .transfer_direction
            .as_deref()
            .map(TransferDirection::try_from)
            .transpose()?;

        let tx = Self {
            id: parse_uuid(&model.id, "transaction")?,
            user_id: model.user_id,
            account_id: parse_uuid(&model.account_id, "account")?,
            category_id: parse_optional_uuid(model.category_id.as_deref(), "category")?,
            kind: TransactionType::try_from(model.kind.as_str())?,
            transfer_direction,
            transfer_group_id: parse_optional_uuid(
                model.transfer_group_id.as_deref(),
                "transfer group",
            )?,
            amount_minor: model.amount_minor,
            currency: Currency::try_from(model.currency.as_str())?,
            transaction_date: model.transaction_date,
            description: model.description,
            fx_rate_micros: model.fx_rate_micros,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };
        // A stored row that breaks the invariant is a bug, not user error;
        // surface it instead of letting the row flow through reads.
        tx.validate()?;
        Ok(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> TransactionParts {
        TransactionParts {
            user_id: "alice".to_string(),
            account_id: Uuid::new_v4(),
            category_id: None,
            amount_minor: 1000,
            currency: Currency::Egp,
            transaction_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            description: "salary".to_string(),
            fx_rate_micros: None,
            notes: None,
        }
    }

    #[test]
    fn opposite_direction_is_involutive() {
        assert_eq!(TransferDirection::Out.opposite(), TransferDirection::In);
        assert_eq!(TransferDirection::In.opposite(), TransferDirection::Out);
    }

    #[test]
    fn only_income_and_expense_affect_reports() {
        assert!(TransactionType::Income.affects_reports());
        assert!(TransactionType::Expense.affects_reports());
        assert!(!TransactionType::Transfer.affects_reports());
        assert!(!TransactionType::Adjustment.affects_reports());
    }

    #[test]
    fn standalone_rows_carry_no_transfer_fields() {
        let tx = Transaction::standalone(TransactionType::Income, parts(), Utc::now()).unwrap();
        assert!(tx.transfer_direction.is_none());
        assert!(tx.transfer_group_id.is_none());
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn transfer_leg_carries_direction_and_group() {
        let group = Uuid::new_v4();
        let tx =
            Transaction::transfer_leg(TransferDirection::Out, group, parts(), Utc::now()).unwrap();
        assert_eq!(tx.kind, TransactionType::Transfer);
        assert_eq!(tx.transfer_direction, Some(TransferDirection::Out));
        assert_eq!(tx.transfer_group_id, Some(group));
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn validate_rejects_mixed_states() {
        let mut tx = Transaction::standalone(TransactionType::Income, parts(), Utc::now()).unwrap();
        tx.transfer_group_id = Some(Uuid::new_v4());
        assert!(matches!(
            tx.validate(),
            Err(LedgerError::InvariantViolation(_))
        ));

        let group = Uuid::new_v4();
        let mut leg =
            Transaction::transfer_leg(TransferDirection::In, group, parts(), Utc::now()).unwrap();
        leg.transfer_direction = None;
        assert!(matches!(
            leg.validate(),
            Err(LedgerError::InvariantViolation(_))
        ));
    }

    #[test]
    fn build_rejects_out_of_bound_amounts() {
        let mut bad = parts();
        bad.amount_minor = 0;
        assert!(Transaction::standalone(TransactionType::Income, bad, Utc::now()).is_err());

        let mut bad = parts();
        bad.fx_rate_micros = Some(-1);
        assert!(Transaction::standalone(TransactionType::Income, bad, Utc::now()).is_err());
    }

    #[test]
    fn corrupted_model_fails_read_back() {
        let tx = Transaction::standalone(TransactionType::Income, parts(), Utc::now()).unwrap();
        // Bypass validate() by writing the stored shape directly: an income
        // row carrying a direction but no group id.
        let model = Model {
            id: tx.id.to_string(),
            user_id: tx.user_id.clone(),
            account_id: tx.account_id.to_string(),
            category_id: None,
            kind: tx.kind.as_str().to_string(),
            transfer_direction: Some("out".to_string()),
            transfer_group_id: None,
            amount_minor: tx.amount_minor,
            currency: tx.currency.code().to_string(),
            transaction_date: tx.transaction_date,
            description: tx.description.clone(),
            fx_rate_micros: None,
            notes: None,
            created_at: tx.created_at,
            updated_at: tx.updated_at,
        };
        assert!(matches!(
            Transaction::try_from(model),
            Err(LedgerError::InvariantViolation(_))
        ));
    }
}
