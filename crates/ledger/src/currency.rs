use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Currency code attached to every account, allocation and transaction.
///
/// The set is closed on purpose: the ledger stores amounts per currency and
/// never converts between them at write time. The optional per-transaction
/// `fx_rate_micros` is carried for reporting and nothing else.
///
/// ## Minor units
///
/// Monetary values are stored as an `i64` number of **minor units** (see
/// `Amount`). Both supported currencies use 2 fraction digits, so
/// `10.50 EGP` ⇄ `1050`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Egp,
    Usd,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Egp => "EGP",
            Currency::Usd => "USD",
        }
    }

    /// Display symbol used by clients.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Egp => "E£",
            Currency::Usd => "$",
        }
    }

    /// Number of fraction digits used when formatting/parsing amounts.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Egp | Currency::Usd => 2,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EGP" => Ok(Currency::Egp),
            "USD" => Ok(Currency::Usd),
            other => Err(LedgerError::InvalidRequest(format!(
                "unsupported currency: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_codes() {
        assert_eq!(Currency::try_from("EGP").unwrap(), Currency::Egp);
        assert_eq!(Currency::try_from(" usd ").unwrap(), Currency::Usd);
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert!(Currency::try_from("EUR").is_err());
        assert!(Currency::try_from("").is_err());
    }
}
