//! Exact money amounts.
//!
//! Costs are stored as signed minor units (hundredths) so threshold
//! comparisons such as `4999.99 < 5000` are exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MINOR_PER_MAJOR: i64 = 100;

/// Errors that can occur when parsing a cost from text
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CostParseError {
    #[error("Empty cost string")]
    Empty,

    #[error("Invalid cost '{input}': expected digits with an optional '.' and up to 2 decimals")]
    Malformed { input: String },

    #[error("Cost '{input}' has more than 2 decimal places")]
    TooPrecise { input: String },

    #[error("Cost '{input}' is out of range")]
    OutOfRange { input: String },
}

/// A money amount in minor units.
///
/// No sign or range validation is applied; negative costs are representable.
///
/// # Example
///
/// ```rust
/// use wishlist::Cost;
///
/// let cost: Cost = "4999.99".parse().unwrap();
/// assert_eq!(cost, Cost::from_minor_units(499_999));
/// assert!(cost < Cost::from_major_units(5000));
/// assert_eq!(cost.to_string(), "4999.99");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(i64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    pub const fn from_minor_units(minor: i64) -> Self {
        Cost(minor)
    }

    /// Saturates at the `i64` bounds.
    pub const fn from_major_units(major: i64) -> Self {
        Cost(major.saturating_mul(MINOR_PER_MAJOR))
    }

    pub const fn minor_units(&self) -> i64 {
        self.0
    }
}

impl FromStr for Cost {
    type Err = CostParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(CostParseError::Empty);
        }

        let malformed = || CostParseError::Malformed {
            input: input.to_string(),
        };
        let out_of_range = || CostParseError::OutOfRange {
            input: input.to_string(),
        };

        let (negative, unsigned) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input.strip_prefix('+').unwrap_or(input)),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(malformed());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(malformed());
        }
        if fraction.len() > 2 {
            return Err(CostParseError::TooPrecise {
                input: input.to_string(),
            });
        }

        // i128 so that `i64::MIN`, whose magnitude exceeds `i64::MAX`, still parses.
        let whole: i128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let fraction: i128 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i128>().map_err(|_| malformed())? * 10,
            _ => fraction.parse().map_err(|_| malformed())?,
        };

        let magnitude = whole
            .checked_mul(i128::from(MINOR_PER_MAJOR))
            .and_then(|m| m.checked_add(fraction))
            .ok_or_else(out_of_range)?;
        let signed = if negative { -magnitude } else { magnitude };

        i64::try_from(signed).map(Cost).map_err(|_| out_of_range())
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = MINOR_PER_MAJOR as u64;
        write!(f, "{}{}.{:02}", sign, abs / per, abs % per)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!("5000".parse::<Cost>(), Ok(Cost::from_minor_units(500_000)));
        assert_eq!("4999.99".parse::<Cost>(), Ok(Cost::from_minor_units(499_999)));
        assert_eq!("12.5".parse::<Cost>(), Ok(Cost::from_minor_units(1_250)));
        assert_eq!(".75".parse::<Cost>(), Ok(Cost::from_minor_units(75)));
        assert_eq!("-12.5".parse::<Cost>(), Ok(Cost::from_minor_units(-1_250)));
        assert_eq!(" 100 ".parse::<Cost>(), Ok(Cost::from_major_units(100)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!("".parse::<Cost>(), Err(CostParseError::Empty));
        assert!(matches!(
            "12,50".parse::<Cost>(),
            Err(CostParseError::Malformed { .. })
        ));
        assert!(matches!(
            ".".parse::<Cost>(),
            Err(CostParseError::Malformed { .. })
        ));
        assert!(matches!(
            "1.2.3".parse::<Cost>(),
            Err(CostParseError::Malformed { .. })
        ));
        assert!(matches!(
            "--5".parse::<Cost>(),
            Err(CostParseError::Malformed { .. })
        ));
    }

    #[test]
    fn rejects_sub_cent_precision() {
        assert!(matches!(
            "4999.999".parse::<Cost>(),
            Err(CostParseError::TooPrecise { .. })
        ));
    }

    #[test]
    fn display_parses_back_at_the_bounds() {
        for cost in [Cost::from_minor_units(i64::MIN), Cost::from_minor_units(i64::MAX)] {
            assert_eq!(cost.to_string().parse::<Cost>(), Ok(cost));
        }
        assert_eq!(
            Cost::from_minor_units(i64::MIN).to_string(),
            "-92233720368547758.08"
        );
    }

    #[test]
    fn rejects_overflow() {
        assert!(matches!(
            "-92233720368547758.09".parse::<Cost>(),
            Err(CostParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            "92233720368547758.08".parse::<Cost>(),
            Err(CostParseError::OutOfRange { .. })
        ));
        assert!(matches!(
            "99999999999999999999".parse::<Cost>(),
            Err(CostParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn display_always_has_two_decimals() {
        assert_eq!(Cost::from_major_units(5000).to_string(), "5000.00");
        assert_eq!(Cost::from_minor_units(499_999).to_string(), "4999.99");
        assert_eq!(Cost::from_minor_units(-5).to_string(), "-0.05");
        assert_eq!(Cost::ZERO.to_string(), "0.00");
    }

    #[test]
    fn ordering_is_exact_at_the_cent() {
        assert!(Cost::from_minor_units(499_999) < Cost::from_major_units(5000));
        assert!(Cost::from_minor_units(500_001) > Cost::from_major_units(5000));
    }

    #[test]
    fn serializes_as_minor_units() {
        let json = serde_json::to_string(&Cost::from_minor_units(1_250)).unwrap();
        assert_eq!(json, "1250");
    }
}
