//! The module contains the errors the ledger can throw.
//!
//! `NotFound` deliberately covers both "does not exist" and "not owned by the
//! caller": a lookup never reveals whether a row exists for another user.
use sea_orm::DbErr;
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NotFound(a), Self::NotFound(b)) => a == b,
            (Self::InvalidRequest(a), Self::InvalidRequest(b)) => a == b,
            (Self::InvariantViolation(a), Self::InvariantViolation(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
