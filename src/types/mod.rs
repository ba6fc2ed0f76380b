// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Translation between vendor tokens and canonical thermostat values.
//!
//! The tables here are immutable data: each enum owns its vendor vocabulary,
//! so an unrecognized token can only reach an explicit fallback branch.
//!
//! # Types
//!
//! - [`SystemMode`] - Configured mode (Off/Heat/Cool/Auto, indices 0-3)
//! - [`RunState`] - Current operating state derived from `runStatus`
//! - [`FanSetting`] - Fan On/Auto written through the `fan` key
//! - [`ScheduleState`] - Schedule On/Off, the inverse of the override flag
//! - [`Setpoint`] - Whole-degree setpoint (truncated from `f64`)

mod mode;
mod run_state;
mod setpoint;
mod setting;
mod timestamp;

pub use mode::SystemMode;
pub use run_state::{FAN_NEEDED_TOKEN, RunState, fan_running};
pub use setpoint::Setpoint;
pub use setting::{FanSetting, SCHEDULE_SET_BY, ScheduleState, is_override};
pub use timestamp::{HISTORY_TIMESTAMP_FORMAT, format_bound, parse_history_timestamp, parse_timezone};
