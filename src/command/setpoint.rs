// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Setpoint write command.

use crate::command::{Command, RequestKind, THERMOSTAT_WRITE_OBJECT, ValueClause};
use crate::error::ValueError;
use crate::types::Setpoint;

/// Requested setpoint changes. Absent fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SetpointUpdate {
    /// New heating setpoint.
    pub heat: Option<f64>,
    /// New cooling setpoint.
    pub cool: Option<f64>,
}

impl SetpointUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

/// Appends the heat then cool setpoint pairs present in the request.
pub(crate) fn push_setpoints(
    clause: &mut ValueClause,
    heat: Option<f64>,
    cool: Option<f64>,
) -> Result<(), ValueError> {
    clause.push_opt("heatSetting", heat.map(Setpoint::truncate).transpose()?);
    clause.push_opt("coolSetting", cool.map(Setpoint::truncate).transpose()?);
    Ok(())
}

/// Command writing heat and/or cool setpoints of one thermostat.
///
/// Values are truncated to whole degrees.
///
/// # Examples
///
/// ```
/// use pelican_lib::command::{Command, SetpointCommand, SetpointUpdate};
///
/// let update = SetpointUpdate::new().with_heat(68.7).with_cool(75.2);
/// let cmd = SetpointCommand::encode("Lobby", &update).unwrap();
/// assert_eq!(cmd.value(), "heatSetting:68;coolSetting:75;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetpointCommand {
    name: String,
    clause: ValueClause,
}

impl SetpointCommand {
    /// Validates and encodes `update` for the thermostat called `name`.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::NonFiniteSetpoint` if a setpoint is not finite.
    pub fn encode(name: impl Into<String>, update: &SetpointUpdate) -> Result<Self, ValueError> {
        let mut clause = ValueClause::new();
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

impl Command for SetpointCommand {
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
