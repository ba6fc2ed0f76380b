// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical thermostat status and freshness checks.
//!
//! A status snapshot fuses two vendor reads: the current reading of the
//! thermostat and the timestamps of its recent history. The reading supplies
//! every field of [`ThermostatStatus`]; the history only establishes whether
//! the device is still reporting.
//!
//! Temperatures and setpoints are passed through in the unit the thermostat
//! is configured for. Thermostats configured for Celsius are not detected
//! and no conversion is attempted.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::response::ThermostatReading;
use crate::types::{RunState, SystemMode, fan_running, is_override};

/// One normalized status snapshot.
///
/// `mode` and `state` are independent: a thermostat in [`SystemMode::Auto`]
/// may be [`RunState::Cooling`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermostatStatus {
    /// Current temperature.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub relative_humidity: f64,
    /// Heating setpoint.
    pub heating_setpoint: f64,
    /// Cooling setpoint.
    pub cooling_setpoint: f64,
    /// Whether the setpoints were set by something other than the schedule.
    #[serde(rename = "override")]
    pub override_active: bool,
    /// Whether the fan is running.
    pub fan: bool,
    /// Configured system mode.
    pub mode: SystemMode,
    /// Current operating state.
    pub state: RunState,
    /// Capture time of this snapshot, Unix nanoseconds, from the local clock.
    #[serde(rename = "time")]
    pub observed_at_nanos: i64,
}

impl ThermostatStatus {
    /// Builds a snapshot from a current reading.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use pelican_lib::response::ThermostatReading;
    /// use pelican_lib::status::ThermostatStatus;
    /// use pelican_lib::types::{RunState, SystemMode};
    ///
    /// let reading = ThermostatReading {
    ///     system: "Auto".to_string(),
    ///     run_status: "Cool-Stage1".to_string(),
    ///     set_by: "Manual".to_string(),
    ///     ..Default::default()
    /// };
    /// let status = ThermostatStatus::from_reading(&reading, Utc::now());
    /// assert_eq!(status.mode, SystemMode::Auto);
    /// assert_eq!(status.state, RunState::Cooling);
    /// assert!(status.fan);
    /// assert!(status.override_active);
    /// ```
    #[must_use]
    pub fn from_reading(reading: &ThermostatReading, observed_at: DateTime<Utc>) -> Self {
        Self {
            temperature: reading.temperature,
            relative_humidity: f64::from(reading.humidity),
            heating_setpoint: f64::from(reading.heat_setting),
            cooling_setpoint: f64::from(reading.cool_setting),
            override_active: is_override(&reading.set_by),
            fan: fan_running(&reading.run_status, &reading.heat_needs_fan),
            mode: SystemMode::from_token_lossy(&reading.system),
            state: RunState::from_run_status(&reading.run_status),
            observed_at_nanos: observed_at.timestamp_nanos_opt().unwrap_or(i64::MAX),
        }
    }

    /// Returns the capture time as a `DateTime`.
    #[must_use]
    pub fn observed_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.observed_at_nanos)
    }
}

/// Time windows used to judge whether a thermostat is still reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessPolicy {
    /// How far back history is requested.
    pub history_window: Duration,
    /// Age of the newest history record beyond which a snapshot is stale.
    pub stale_after: Duration,
}

impl FreshnessPolicy {
    /// Default history lookback.
    pub const DEFAULT_HISTORY_WINDOW: Duration = Duration::from_secs(60 * 60);
    /// Default staleness threshold.
    pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(2 * 60 * 60);

    /// Sets the history lookback.
    #[must_use]
    pub fn with_history_window(mut self, window: Duration) -> Self {
        self.history_window = window;
        self
    }

    /// Sets the staleness threshold.
    #[must_use]
    pub fn with_stale_after(mut self, threshold: Duration) -> Self {
        self.stale_after = threshold;
        self
    }

    /// Checks the newest history record against the threshold.
    ///
    /// Returns `Some` when `last_report` is strictly older than
    /// `now - stale_after`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeDelta, Utc};
    /// use pelican_lib::status::FreshnessPolicy;
    ///
    /// let policy = FreshnessPolicy::default();
    /// let now = Utc::now();
    /// assert!(policy.check(now - TimeDelta::hours(1), now).is_none());
    /// assert!(policy.check(now - TimeDelta::hours(3), now).is_some());
    /// ```
    #[must_use]
    pub fn check(&self, last_report: DateTime<Utc>, now: DateTime<Utc>) -> Option<Staleness> {
        let threshold = TimeDelta::from_std(self.stale_after).unwrap_or(TimeDelta::MAX);
        let age = now.signed_duration_since(last_report);
        (age > threshold).then_some(Staleness { age, threshold })
    }
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            history_window: Self::DEFAULT_HISTORY_WINDOW,
            stale_after: Self::DEFAULT_STALE_AFTER,
        }
    }
}

/// Warning attached to a snapshot whose history has not advanced recently.
///
/// The reading may still be valid; the thermostat simply has not recorded
/// a change within the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Staleness {
    /// Age of the newest history record.
    pub age: TimeDelta,
    /// Threshold that was exceeded.
    pub threshold: TimeDelta,
}

/// Result of a successful status poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusReport {
    /// The canonical snapshot.
    pub status: ThermostatStatus,
    /// Timestamp of the newest history record, in the thermostat's timezone.
    pub last_report: DateTime<Tz>,
    /// Present when the newest history record is older than the threshold.
    pub staleness: Option<Staleness>,
}

impl StatusReport {
    /// Returns whether the snapshot carries a staleness warning.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.staleness.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reading(run_status: &str, heat_needs_fan: &str) -> ThermostatReading {
        ThermostatReading {
            temperature: 70.5,
            humidity: 45,
            heat_setting: 68,
            cool_setting: 75,
            set_by: "Schedule".to_string(),
            heat_needs_fan: heat_needs_fan.to_string(),
            system: "Heat".to_string(),
            run_status: run_status.to_string(),
            status_display: "Heating".to_string(),
        }
    }

    #[test]
    fn snapshot_fields_from_reading() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let status = ThermostatStatus::from_reading(&reading("Heat-Stage1", "Yes"), now);
        assert!((status.temperature - 70.5).abs() < f64::EPSILON);
        assert!((status.relative_humidity - 45.0).abs() < f64::EPSILON);
        assert!((status.heating_setpoint - 68.0).abs() < f64::EPSILON);
        assert!((status.cooling_setpoint - 75.0).abs() < f64::EPSILON);
        assert!(!status.override_active);
        assert!(status.fan);
        assert_eq!(status.mode, SystemMode::Heat);
        assert_eq!(status.state, RunState::Heating);
        assert_eq!(status.observed_at(), now);
    }

    #[test]
    fn heat_without_fan_flag() {
        let status = ThermostatStatus::from_reading(&reading("Heat-Stage2", "No"), Utc::now());
        assert_eq!(status.state, RunState::Heating);
        assert!(!status.fan);
    }

    #[test]
    fn fan_only_run_reports_off_with_fan() {
        let status = ThermostatStatus::from_reading(&reading("Fan-Only", "No"), Utc::now());
        assert_eq!(status.state, RunState::Off);
        assert!(status.fan);
    }

    #[test]
    fn serializes_with_record_field_names() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let status = ThermostatStatus::from_reading(&reading("Cool-Stage1", "No"), now);
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["override"], false);
        assert_eq!(json["mode"], 1);
        assert_eq!(json["state"], 2);
        assert_eq!(json["fan"], true);
        assert_eq!(json["time"], now.timestamp_nanos_opt().unwrap());
    }

    #[test]
    fn freshness_boundary_is_exclusive() {
        let policy = FreshnessPolicy::default();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert!(policy.check(now - TimeDelta::hours(2), now).is_none());
        let stale = policy
            .check(now - TimeDelta::hours(2) - TimeDelta::minutes(1), now)
            .unwrap();
        assert_eq!(stale.age, TimeDelta::minutes(121));
        assert_eq!(stale.threshold, TimeDelta::hours(2));
    }

    #[test]
    fn custom_threshold() {
        let policy = FreshnessPolicy::default().with_stale_after(Duration::from_secs(600));
        let now = Utc::now();
        assert!(policy.check(now - TimeDelta::minutes(11), now).is_some());
        assert_eq!(policy.history_window, FreshnessPolicy::DEFAULT_HISTORY_WINDOW);
    }
}
