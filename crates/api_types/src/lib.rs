use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Egp,
    Usd,
}

pub mod account {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum AccountKind {
        Checking,
        Savings,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountNew {
        pub name: String,
        pub kind: AccountKind,
        pub currency: Currency,
    }

    /// Partial update. Absent fields are left untouched; a patch with no
    /// fields set is rejected.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountUpdate {
        pub name: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountView {
        pub id: Uuid,
        pub name: String,
        pub kind: AccountKind,
        pub currency: Currency,
        pub active: bool,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AccountsResponse {
        pub accounts: Vec<AccountView>,
    }
}

pub mod category {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum CategoryKind {
        Income,
        Expense,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryNew {
        pub name: String,
        pub kind: CategoryKind,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryUpdate {
        pub name: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: Uuid,
        pub name: String,
        pub kind: CategoryKind,
        pub active: bool,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoriesResponse {
        pub categories: Vec<CategoryView>,
    }
}

pub mod allocation {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum ContainerType {
        AccountBased,
        Standalone,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum AllocationStatus {
        Active,
        Matured,
        Released,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AllocationNew {
        pub account_id: Option<Uuid>,
        pub container_type: ContainerType,
        pub name: String,
        pub amount_minor: i64,
        pub currency: Currency,
        pub start_date: NaiveDate,
        pub maturity_date: Option<NaiveDate>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AllocationView {
        pub id: Uuid,
        pub account_id: Option<Uuid>,
        pub container_type: ContainerType,
        pub name: String,
        pub amount_minor: i64,
        pub currency: Currency,
        pub start_date: NaiveDate,
        pub maturity_date: Option<NaiveDate>,
        pub status: AllocationStatus,
        pub notes: Option<String>,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AllocationsResponse {
        pub allocations: Vec<AllocationView>,
    }
}

pub mod transaction {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransactionKind {
        Income,
        Expense,
        Transfer,
        Adjustment,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum TransferDirection {
        Out,
        In,
    }

    /// Create a standalone transaction (income, expense or adjustment).
    ///
    /// Transfers go through [`TransferNew`] instead.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub account_id: Uuid,
        pub category_id: Option<Uuid>,
        pub kind: TransactionKind,
        pub amount_minor: i64,
        pub currency: Currency,
        pub transaction_date: NaiveDate,
        pub description: String,
        pub fx_rate_micros: Option<i64>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransferNew {
        pub from_account_id: Uuid,
        pub to_account_id: Uuid,
        pub amount_minor: i64,
        pub currency: Currency,
        pub transfer_date: NaiveDate,
        pub description: String,
        pub fx_rate_micros: Option<i64>,
        pub notes: Option<String>,
    }

    /// Partial update over a non-transfer transaction. Absent fields keep
    /// their current value; a patch with no fields set is rejected.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransactionUpdate {
        pub category_id: Option<Uuid>,
        pub amount_minor: Option<i64>,
        pub transaction_date: Option<NaiveDate>,
        pub description: Option<String>,
        pub fx_rate_micros: Option<i64>,
        pub notes: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub account_id: Uuid,
        pub category_id: Option<Uuid>,
        pub kind: TransactionKind,
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

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionsResponse {
        pub transactions: Vec<TransactionView>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransferView {
        pub transfer_group_id: Uuid,
        pub outgoing: TransactionView,
        pub incoming: TransactionView,
    }
}

pub mod dashboard {
    use super::*;
    use std::collections::HashMap;

    /// Summary snapshot; all values are minor units and the per-currency map
    /// is keyed by currency code.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct DashboardView {
        pub total_wealth_minor: i64,
        pub total_liquid_minor: i64,
        pub total_allocated_minor: i64,
        pub wealth_by_currency: HashMap<String, i64>,
        pub monthly_income_minor: i64,
        pub monthly_expense_minor: i64,
        pub monthly_savings_minor: i64,
    }
}
