use sea_orm::DatabaseConnection;

use crate::{LedgerError, ResultLedger};

mod access;
mod accounts;
mod allocations;
mod categories;
mod dashboard;
mod transactions;

pub use dashboard::DashboardSummary;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// The ledger service: the only write path into the transaction store and
/// the read side for lists and the dashboard.
#[derive(Debug)]
pub struct Ledger {
    database: DatabaseConnection,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }
}

/// Trim a required text field and enforce presence and a length bound.
fn normalize_required_text(value: &str, label: &str, max_len: usize) -> ResultLedger<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidRequest(format!(
            "{label} must not be empty"
        )));
    }
    if trimmed.chars().count() > max_len {
        return Err(LedgerError::InvalidRequest(format!(
            "{label} must not exceed {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field, mapping whitespace-only input to `None`.
fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// The builder for `Ledger`
#[derive(Default)]
pub struct LedgerBuilder {
    database: DatabaseConnection,
}

impl LedgerBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> LedgerBuilder {
        self.database = db;
        self
    }

    /// Construct `Ledger`
    pub fn build(self) -> Ledger {
        Ledger {
            database: self.database,
        }
    }
}
