// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Current operating state, derived from the vendor run status.
//!
//! The vendor reports what the equipment is doing through a free-form
//! `runStatus` token (`"Heat-Stage1"`, `"Cool-Stage2"`, `"Off"`, fan-only
//! variants, ...). This module collapses it into [`RunState`] and derives
//! whether the fan is running.

/// Affirmative token of the vendor `HeatNeedsFan` flag.
pub const FAN_NEEDED_TOKEN: &str = "Yes";

/// Run-status tokens that map to an active state. Everything else is `Off`.
const ACTIVE_RUN_STATUSES: [(&str, RunState); 4] = [
    ("Heat-Stage1", RunState::Heating),
    ("Heat-Stage2", RunState::Heating),
    ("Cool-Stage1", RunState::Cooling),
    ("Cool-Stage2", RunState::Cooling),
];

/// What a thermostat is currently doing.
///
/// # Examples
///
/// ```
/// use pelican_lib::types::RunState;
///
/// assert_eq!(RunState::from_run_status("Heat-Stage2"), RunState::Heating);
/// assert_eq!(RunState::from_run_status("Cool-Stage1"), RunState::Cooling);
/// assert_eq!(RunState::from_run_status("Fan-Only"), RunState::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(into = "i32")]
pub enum RunState {
    /// Not calling for heat or cool.
    #[default]
    Off,
    /// Calling for heat.
    Heating,
    /// Calling for cool.
    Cooling,
}

impl RunState {
    /// Resolves a vendor run-status token.
    ///
    /// Only the staged heat and cool tokens are considered active. Unknown
    /// tokens, including fan-only runs, resolve to [`RunState::Off`].
    #[must_use]
    pub fn from_run_status(run_status: &str) -> Self {
        ACTIVE_RUN_STATUSES
            .iter()
            .find(|(token, _)| *token == run_status)
            .map_or_else(
                || {
                    if run_status != "Off" {
                        tracing::debug!(run_status, "Run status is not an active stage, reporting Off");
                    }
                    Self::Off
                },
                |(_, state)| *state,
            )
    }

    /// Returns the canonical state number (0 = off, 1 = heating, 2 = cooling).
    #[must_use]
    pub const fn index(&self) -> i32 {
        match self {
            Self::Off => 0,
            Self::Heating => 1,
            Self::Cooling => 2,
        }
    }

    /// Returns whether the equipment is actively heating or cooling.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl From<RunState> for i32 {
    fn from(state: RunState) -> Self {
        state.index()
    }
}

/// Derives whether the fan is running.
///
/// Rules, first match wins:
/// 1. A heat run (`runStatus` starting with `"Heat"`) only runs the fan when
///    the `HeatNeedsFan` flag is [`FAN_NEEDED_TOKEN`].
/// 2. Any other run status except `"Off"` runs the fan.
/// 3. Otherwise the fan is off.
///
/// # Examples
///
/// ```
/// use pelican_lib::types::fan_running;
///
/// assert!(!fan_running("Heat-Stage1", "No"));
/// assert!(fan_running("Heat-Stage1", "Yes"));
/// assert!(fan_running("Cool-Stage1", "No"));
/// assert!(!fan_running("Off", "Yes"));
/// ```
#[must_use]
pub fn fan_running(run_status: &str, heat_needs_fan: &str) -> bool {
    if run_status.starts_with("Heat") {
        heat_needs_fan == FAN_NEEDED_TOKEN
    } else {
        run_status != "Off"
    }
}
