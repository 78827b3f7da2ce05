use crate::error::TrackerError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Represents a rupee amount pulled out of a message.
///
/// Wraps `rust_decimal::Decimal` and only admits values inside the open interval
/// `(0, 100_000_000)`. Anything outside that range is treated as a misread number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Amount(Decimal);

impl Amount {
    /// Exclusive upper bound for an accepted amount.
    pub const UPPER_BOUND: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

    pub fn new(value: Decimal) -> Result<Self, TrackerError> {
        if value <= Decimal::ZERO {
            return Err(TrackerError::ValidationError(
                "Amount must be positive".to_string(),
            ));
        }
        if value >= Self::UPPER_BOUND {
            return Err(TrackerError::ValidationError(format!(
                "Amount must be below {}",
                Self::UPPER_BOUND
            )));
        }
        Ok(Self(value))
    }

    /// Parses a candidate such as `"1,23,456.70"`.
    ///
    /// Grouping commas are dropped before parsing. Returns `None` when the candidate is
    /// not a number, overflows, or falls outside the accepted range.
    pub fn parse_candidate(candidate: &str) -> Option<Self> {
        let numeric: String = candidate.chars().filter(|c| *c != ',').collect();
        let value = Decimal::from_str(&numeric).ok()?;
        Self::new(value).ok()
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Two-decimal rendering used in notification text.
    pub fn display(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.2}", rounded)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
