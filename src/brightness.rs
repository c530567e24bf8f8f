//! Percentage expressions and the brightness arithmetic behind them.
//!
//! An expression is an optional sign, a magnitude without leading zeros and a
//! trailing `%`:
//!
//! | Expression | Meaning |
//! |------------|---------|
//! | `40%` | set brightness to 40% of max |
//! | `+10%` | raise brightness by 10% of max |
//! | `-10%` | lower brightness by 10% of max |

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{BctlError, Result};

/// Direction of a relative change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Increase,
    Decrease,
}

/// A parsed percentage expression.
///
/// `sign == None` means an absolute set; otherwise the change is relative to
/// the current brightness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentChange {
    pub sign: Option<Sign>,
    pub percent: f64,
}

impl PercentChange {
    /// Step count corresponding to `percent` of `max`, truncated toward zero.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn steps(&self, max: u32) -> u32 {
        (self.percent / 100.0 * f64::from(max)) as u32
    }

    /// Apply the change to `current`, clamping into `[0, max]`.
    pub fn apply(&self, current: u32, max: u32) -> u32 {
        let diff = self.steps(max);
        let current = current.min(max);
        let result = match self.sign {
            Some(Sign::Increase) => current.saturating_add(diff).min(max),
            Some(Sign::Decrease) => current.saturating_sub(diff),
            None => diff,
        };
        trace!(current, max, diff, result, "Applied percentage change");
        debug_assert!(result <= max, "brightness {result} exceeds max {max}");
        result
    }
}

impl FromStr for PercentChange {
    type Err = BctlError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BctlError::InvalidExpression {
            expr: s.to_string(),
        };

        let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
            (Some(Sign::Increase), rest)
        } else if let Some(rest) = s.strip_prefix('-') {
            (Some(Sign::Decrease), rest)
        } else {
            (None, s)
        };

        let digits = rest.strip_suffix('%').ok_or_else(invalid)?;
        let well_formed = match digits.as_bytes() {
            [] => false,
            [only] => only.is_ascii_digit(),
            [first, tail @ ..] => {
                (b'1'..=b'9').contains(first) && tail.iter().all(u8::is_ascii_digit)
            }
        };
        if !well_formed {
            return Err(invalid());
        }

        let percent: f64 = digits.parse().map_err(|_| invalid())?;
        if !(0.0..=100.0).contains(&percent) {
            return Err(BctlError::OutOfRange { value: percent });
        }

        Ok(Self { sign, percent })
    }
}

impl fmt::Display for PercentChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.sign {
            Some(Sign::Increase) => "+",
            Some(Sign::Decrease) => "-",
            None => "",
        };
        write!(f, "{sign}{}%", self.percent)
    }
}

/// Compute the new brightness for `expr` given the device's current and
/// maximum values.
///
/// The result always lies in `[0, max]`.
pub fn calc_new_brightness(current: u32, max: u32, expr: &str) -> Result<u32> {
    let change: PercentChange = expr.parse()?;
    Ok(change.apply(current, max))
}
