// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan and schedule settings written through the `fan` and `schedule` keys.

use std::fmt;

/// Vendor `setBy` token meaning the setpoints come from the schedule.
pub const SCHEDULE_SET_BY: &str = "Schedule";

/// Fan operating setting.
///
/// # Examples
///
/// ```
/// use pelican_lib::types::FanSetting;
///
/// assert_eq!(FanSetting::from(true).as_str(), "On");
/// assert_eq!(FanSetting::from(false).as_str(), "Auto");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanSetting {
    /// Fan forced on.
    On,
    /// Fan runs with the equipment.
    Auto,
}

impl FanSetting {
    /// Returns the vendor token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Auto => "Auto",
        }
    }
}

impl From<bool> for FanSetting {
    fn from(force_on: bool) -> Self {
        if force_on { Self::On } else { Self::Auto }
    }
}

impl fmt::Display for FanSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the programmed schedule governs the setpoints.
///
/// An operator override is expressed to the vendor by turning the schedule
/// *off*, so `override = true` encodes as [`ScheduleState::Off`].
///
/// # Examples
///
/// ```
/// use pelican_lib::types::ScheduleState;
///
/// assert_eq!(ScheduleState::from_override(true).as_str(), "Off");
/// assert_eq!(ScheduleState::from_override(false).as_str(), "On");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleState {
    /// Schedule governs the setpoints.
    On,
    /// Schedule disabled; setpoints are held.
    Off,
}

impl ScheduleState {
    /// Converts an override flag into the schedule state that expresses it.
    #[must_use]
    pub const fn from_override(override_active: bool) -> Self {
        if override_active { Self::Off } else { Self::On }
    }

    /// Returns the vendor token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::On => "On",
            Self::Off => "Off",
        }
    }
}

impl fmt::Display for ScheduleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns whether the current setpoints were set by anything but the schedule.
#[must_use]
pub fn is_override(set_by: &str) -> bool {
    set_by != SCHEDULE_SET_BY
}
