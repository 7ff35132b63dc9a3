//! Internal helpers for model validation and conversion.
//!
//! These utilities are **not** part of the public API. They centralize
//! parsing and mapping logic so the ledger enforces consistent invariants.

use uuid::Uuid;

use crate::{LedgerError, ResultLedger};

/// Parse a UUID from storage and return a labeled error on failure.
pub(crate) fn parse_uuid(value: &str, label: &str) -> ResultLedger<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| LedgerError::InvalidRequest(format!("invalid {label} id")))
}

/// Parse an optional UUID column from storage.
pub(crate) fn parse_optional_uuid(value: Option<&str>, label: &str) -> ResultLedger<Option<Uuid>> {
    value.map(|v| parse_uuid(v, label)).transpose()
}
