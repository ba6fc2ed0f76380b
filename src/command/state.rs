// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State write command.
//!
//! Pairs are emitted in the fixed order `system`, `schedule`, `fan`,
//! `heatSetting`, `coolSetting`. Some thermostat firmwares apply the pairs in
//! arrival order, so the order is part of the wire contract.

use crate::command::setpoint::push_setpoints;
use crate::command::{Command, RequestKind, THERMOSTAT_WRITE_OBJECT, ValueClause};
use crate::error::ValueError;
use crate::types::{FanSetting, ScheduleState, SystemMode};

/// Requested state changes. Absent fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateUpdate {
    /// New system mode index, 0 = off, 1 = heat, 2 = cool, 3 = auto.
    pub mode: Option<i32>,
    /// `true` disables the schedule (operator override), `false` re-enables it.
    pub override_schedule: Option<bool>,
    /// `true` forces the fan on, `false` returns it to auto.
    pub fan: Option<bool>,
    /// New heating setpoint.
    pub heat: Option<f64>,
    /// New cooling setpoint.
    pub cool: Option<f64>,
}

impl StateUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the system mode.
    #[must_use]
    pub fn with_mode(mut self, mode: SystemMode) -> Self {
        self.mode = Some(mode.index());
        self
    }

    /// Sets the system mode from a raw index, validated at encode time.
    #[must_use]
    pub fn with_mode_index(mut self, mode: i32) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Enables (`true`) or clears (`false`) the operator override.
    #[must_use]
    pub fn with_override(mut self, active: bool) -> Self {
        self.override_schedule = Some(active);
        self
    }

    /// Forces the fan on (`true`) or returns it to auto (`false`).
    #[must_use]
    pub fn with_fan(mut self, force_on: bool) -> Self {
        self.fan = Some(force_on);
        self
    }

    /// Sets the heating setpoint.
    #[must_use]
    pub fn with_heat(mut self, degrees: f64) -> Self {
        self.heat = Some(degrees);
        self
    }

    /// Sets the cooling setpoint.
    #[must_use]
    pub fn with_cool(mut self, degrees: f64) -> Self {
        self.cool = Some(degrees);
        self
    }
}

/// Command writing mode, schedule, fan and setpoints of one thermostat.
///
/// # Examples
///
/// ```
/// use pelican_lib::command::{Command, StateCommand, StateUpdate};
/// use pelican_lib::types::SystemMode;
///
/// let update = StateUpdate::new()
///     .with_cool(74.5)
///     .with_mode(SystemMode::Cool)
///     .with_fan(true);
/// let cmd = StateCommand::encode("Lobby", &update).unwrap();
/// assert_eq!(cmd.value(), "system:Cool;fan:On;coolSetting:74;");
///
/// let bad = StateUpdate::new().with_mode_index(4);
/// assert!(StateCommand::encode("Lobby", &bad).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCommand {
    name: String,
    clause: ValueClause,
}

impl StateCommand {
    /// Validates and encodes `update` for the thermostat called `name`.
    ///
    /// An update with no fields encodes to an empty clause, which the vendor
    /// accepts as a no-op write.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidMode` if the mode is outside `[0, 3]`, or
    /// `ValueError::NonFiniteSetpoint` if a setpoint is not finite.
    pub fn encode(name: impl Into<String>, update: &StateUpdate) -> Result<Self, ValueError> {
        let mut clause = ValueClause::new();

        let mode = update.mode.map(SystemMode::try_from).transpose()?;
        clause.push_opt("system", mode);
        clause.push_opt(
            "schedule",
            update.override_schedule.map(ScheduleState::from_override),
        );
        clause.push_opt("fan", update.fan.map(FanSetting::from));
        push_setpoints(&mut clause, update.heat, update.cool)?;

        Ok(Self {
            name: name.into(),
            clause,
        })
    }

    /// Returns the encoded value clause.
    #[must_use]
    pub fn clause(&self) -> &ValueClause {
        &self.clause
    }
}

impl Command for StateCommand {
    fn request(&self) -> RequestKind {
        RequestKind::Set
    }

    fn object(&self) -> &'static str {
        THERMOSTAT_WRITE_OBJECT
    }

    fn selection(&self) -> Option<String> {
        let mut selection = ValueClause::new();
        selection.push("name", &self.name);
        Some(selection.into())
    }

    fn value(&self) -> String {
        self.clause.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(update: StateUpdate) -> String {
        StateCommand::encode("Lobby", &update).unwrap().value()
    }

    #[test]
    fn full_update_in_fixed_order() {
        let update = StateUpdate {
            mode: Some(3),
            override_schedule: Some(true),
            fan: Some(true),
            heat: Some(65.9),
            cool: Some(78.1),
        };
        assert_eq!(
            encode(update),
            "system:Auto;schedule:Off;fan:On;heatSetting:65;coolSetting:78;"
        );
    }

    #[test]
    fn override_flag_inverts_to_schedule_token() {
        assert_eq!(encode(StateUpdate::new().with_override(true)), "schedule:Off;");
        assert_eq!(encode(StateUpdate::new().with_override(false)), "schedule:On;");
    }

    #[test]
    fn fan_tokens() {
        assert_eq!(encode(StateUpdate::new().with_fan(true)), "fan:On;");
        assert_eq!(encode(StateUpdate::new().with_fan(false)), "fan:Auto;");
    }

    #[test]
    fn every_mode_index_encodes() {
        for (index, token) in ["Off", "Heat", "Cool", "Auto"].iter().enumerate() {
            let index = i32::try_from(index).unwrap();
            assert_eq!(
                encode(StateUpdate::new().with_mode_index(index)),
                format!("system:{token};")
            );
        }
    }

    #[test]
    fn out_of_range_mode_rejected() {
        for mode in [-1, 4, 99] {
            let err = StateCommand::encode("Lobby", &StateUpdate::new().with_mode_index(mode));
            assert_eq!(err, Err(ValueError::InvalidMode(mode)));
        }
    }

    #[test]
    fn empty_update_is_a_no_op_write() {
        let cmd = StateCommand::encode("Lobby", &StateUpdate::new()).unwrap();
        assert_eq!(cmd.request(), RequestKind::Set);
        assert_eq!(cmd.object(), "thermostat");
        assert_eq!(cmd.value(), "");
        assert_eq!(cmd.selection(), Some("name:Lobby;".to_string()));
    }
}
