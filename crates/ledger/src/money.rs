use std::{fmt, str::FromStr};

use crate::LedgerError;

/// Largest storable amount: 13 integer digits and 2 fraction digits.
pub const MAX_AMOUNT_MINOR: i64 = 999_999_999_999_999;

/// Largest storable FX rate: 4 integer digits and 6 fraction digits.
pub const MAX_FX_RATE_MICROS: i64 = 9_999_999_999;

/// Positive money amount represented as **integer minor units** (cents).
///
/// Use this type to validate **all** monetary input in the ledger
/// (transaction and allocation amounts) to avoid floating-point drift.
/// Amounts are always positive; transaction kind and transfer direction
/// carry the sign semantics, never the stored value.
///
/// # Examples
///
/// ```rust
/// use ledger::Amount;
///
/// let amount = Amount::from_minor(12_34).unwrap();
/// assert_eq!(amount.minor(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects
/// more than 2 decimals):
///
/// ```rust
/// use ledger::Amount;
///
/// assert_eq!("10".parse::<Amount>().unwrap().minor(), 1000);
/// assert_eq!("10,5".parse::<Amount>().unwrap().minor(), 1050);
/// assert!("12.345".parse::<Amount>().is_err());
/// assert!("-1".parse::<Amount>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Creates an amount from integer minor units.
    ///
    /// Rejects zero, negative and out-of-bound values.
    pub fn from_minor(minor: i64) -> Result<Self, LedgerError> {
        if minor <= 0 {
            return Err(LedgerError::InvalidRequest(
                "amount must be positive".to_string(),
            ));
        }
        if minor > MAX_AMOUNT_MINOR {
            return Err(LedgerError::InvalidRequest(
                "amount exceeds 13 integer digits".to_string(),
            ));
        }
        Ok(Self(minor))
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / 100;
        let cents = self.0 % 100;
        write!(f, "{units}.{cents:02}")
    }
}

impl FromStr for Amount {
    type Err = LedgerError;

    /// Parses a decimal string into minor units.
    ///
    /// Accepts `.` or `,` as decimal separator. Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects signs, empty and non-numeric strings
    /// - rejects zero and values beyond 13 integer digits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed_point(s, 2).and_then(Amount::from_minor)
    }
}

/// Positive conversion rate to the user's base currency, stored as **integer
/// micro-units** (6 fraction digits).
///
/// The rate is recorded at entry time for reporting; it is never fetched
/// from or checked against a live source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FxRate(i64);

impl FxRate {
    /// Creates a rate from integer micro-units.
    ///
    /// Rejects zero, negative and out-of-bound values.
    pub fn from_micros(micros: i64) -> Result<Self, LedgerError> {
        if micros <= 0 {
            return Err(LedgerError::InvalidRequest(
                "fx rate must be positive".to_string(),
            ));
        }
        if micros > MAX_FX_RATE_MICROS {
            return Err(LedgerError::InvalidRequest(
                "fx rate exceeds 4 integer digits".to_string(),
            ));
        }
        Ok(Self(micros))
    }

    /// Returns the raw value in micro-units.
    #[must_use]
    pub const fn micros(self) -> i64 {
        self.0
    }
}

impl fmt::Display for FxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / 1_000_000;
        let micros = self.0 % 1_000_000;
        write!(f, "{units}.{micros:06}")
    }
}

impl FromStr for FxRate {
    type Err = LedgerError;

    /// Parses a decimal string into micro-units (max 6 fractional digits).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_fixed_point(s, 6).and_then(FxRate::from_micros)
    }
}

fn parse_fixed_point(s: &str, fraction_digits: u32) -> Result<i64, LedgerError> {
    let empty = || LedgerError::InvalidRequest("empty amount".to_string());
    let invalid = || LedgerError::InvalidRequest("invalid amount".to_string());
    let overflow = || LedgerError::InvalidRequest("amount too large".to_string());

    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(empty());
    }

    let normalized = trimmed.replace(',', ".");
    let mut parts = normalized.split('.');
    let units_str = parts.next().ok_or_else(invalid)?;
    let frac_str = parts.next();

    if parts.next().is_some() {
        return Err(invalid());
    }

    if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let units: i64 = units_str.parse().map_err(|_| invalid())?;

    let scale = 10i64.pow(fraction_digits);
    let frac: i64 = match frac_str {
        None | Some("") => 0,
        Some(frac) => {
            if !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            if frac.len() > fraction_digits as usize {
                return Err(LedgerError::InvalidRequest(
                    "too many decimals".to_string(),
                ));
            }
            let digits: i64 = frac.parse().map_err(|_| invalid())?;
            digits * 10i64.pow(fraction_digits - frac.len() as u32)
        }
    };

    units
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac))
        .ok_or_else(overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_display_two_decimals() {
        assert_eq!(Amount::from_minor(1).unwrap().to_string(), "0.01");
        assert_eq!(Amount::from_minor(10).unwrap().to_string(), "0.10");
        assert_eq!(Amount::from_minor(1050).unwrap().to_string(), "10.50");
    }

    #[test]
    fn amount_parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<Amount>().unwrap().minor(), 1000);
        assert_eq!("10.5".parse::<Amount>().unwrap().minor(), 1050);
        assert_eq!("10,50".parse::<Amount>().unwrap().minor(), 1050);
        assert_eq!("  2.30 ".parse::<Amount>().unwrap().minor(), 230);
    }

    #[test]
    fn amount_parse_rejects_bad_input() {
        assert!("12.345".parse::<Amount>().is_err());
        assert!("0".parse::<Amount>().is_err());
        assert!("-1".parse::<Amount>().is_err());
        assert!("+1".parse::<Amount>().is_err());
        assert!("".parse::<Amount>().is_err());
        assert!("1.2.3".parse::<Amount>().is_err());
    }

    #[test]
    fn amount_bounds() {
        assert!(Amount::from_minor(MAX_AMOUNT_MINOR).is_ok());
        assert!(Amount::from_minor(MAX_AMOUNT_MINOR + 1).is_err());
        assert!(Amount::from_minor(0).is_err());
        assert!(Amount::from_minor(-5).is_err());
    }

    #[test]
    fn fx_rate_parse_six_decimals() {
        assert_eq!("1".parse::<FxRate>().unwrap().micros(), 1_000_000);
        assert_eq!("30.95".parse::<FxRate>().unwrap().micros(), 30_950_000);
        assert_eq!("0.000001".parse::<FxRate>().unwrap().micros(), 1);
        assert!("1.0000001".parse::<FxRate>().is_err());
    }

    #[test]
    fn fx_rate_bounds() {
        assert!(FxRate::from_micros(MAX_FX_RATE_MICROS).is_ok());
        assert!(FxRate::from_micros(MAX_FX_RATE_MICROS + 1).is_err());
        assert!(FxRate::from_micros(0).is_err());
    }

    #[test]
    fn fx_rate_display() {
        assert_eq!(FxRate::from_micros(30_950_000).unwrap().to_string(), "30.950000");
    }
}
