// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-degree setpoint values.
//!
//! The vendor accepts integer setpoints only. Fractional requests are
//! truncated toward zero, so `68.7` is written as `68`. No unit conversion is
//! performed: values are in whatever unit the thermostat is configured for.

use std::fmt;

use crate::error::ValueError;

/// A setpoint as accepted by the vendor, in whole degrees.
///
/// # Examples
///
/// ```
/// use pelican_lib::types::Setpoint;
///
/// assert_eq!(Setpoint::truncate(68.7).unwrap().value(), 68);
/// assert_eq!(Setpoint::truncate(-3.9).unwrap().value(), -3);
/// assert!(Setpoint::truncate(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Setpoint(i32);

impl Setpoint {
    /// Creates a setpoint from a whole-degree value.
    #[must_use]
    pub const fn new(degrees: i32) -> Self {
        Self(degrees)
    }

    /// Truncates a fractional setpoint toward zero.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFiniteSetpoint` for NaN, infinities, or values
    /// that do not fit in an `i32`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn truncate(degrees: f64) -> Result<Self, ValueError> {
        let whole = degrees.trunc();
        if !whole.is_finite() || whole < f64::from(i32::MIN) || whole > f64::from(i32::MAX) {
            return Err(ValueError::NonFiniteSetpoint(degrees));
        }
        Ok(Self(whole as i32))
    }

    /// Returns the value in whole degrees.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Setpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_not_rounds() {
        assert_eq!(Setpoint::truncate(68.7).unwrap(), Setpoint::new(68));
        assert_eq!(Setpoint::truncate(68.0).unwrap(), Setpoint::new(68));
        assert_eq!(Setpoint::truncate(71.999).unwrap(), Setpoint::new(71));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Setpoint::truncate(f64::INFINITY).is_err());
        assert!(Setpoint::truncate(f64::NEG_INFINITY).is_err());
        assert!(Setpoint::truncate(1e12).is_err());
    }

    #[test]
    fn display_is_integer() {
        assert_eq!(Setpoint::new(72).to_string(), "72");
    }
}
