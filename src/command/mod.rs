// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pelican API request definitions.
//!
//! Every call to the vendor endpoint is a GET carrying the same handful of
//! query parameters:
//!
//! | Parameter   | Meaning                                             |
//! |-------------|-----------------------------------------------------|
//! | `request`   | `get` to read, `set` to write                       |
//! | `object`    | vendor object (`Thermostat`, `ThermostatHistory`, `Site`) |
//! | `selection` | optional filter, a [`ValueClause`] such as `name:Lobby;` |
//! | `value`     | field list for reads, [`ValueClause`] for writes    |
//!
//! # Available Commands
//!
//! | Command Type | Purpose |
//! |-------------|---------|
//! | [`ThermostatQuery`] | Current reading of one thermostat |
//! | [`HistoryQuery`] | History timestamps within a time window |
//! | [`SiteQuery`] | Site timezone |
//! | [`ThermostatListQuery`] | Names and descriptions of all thermostats |
//! | [`SetpointCommand`] | Write heat and/or cool setpoints |
//! | [`StateCommand`] | Write mode, schedule, fan and setpoints |
//!
//! # Examples
//!
//! ```
//! use pelican_lib::command::{Command, StateCommand, StateUpdate};
//!
//! let update = StateUpdate::new().with_override(true).with_fan(false);
//! let cmd = StateCommand::encode("Lobby", &update).unwrap();
//!
//! assert_eq!(cmd.selection(), Some("name:Lobby;".to_string()));
//! assert_eq!(cmd.value(), "schedule:Off;fan:Auto;");
//! ```

mod clause;
mod query;
mod setpoint;
mod state;

pub use clause::{ValueClause, check_name};
pub use query::{HistoryQuery, SiteQuery, THERMOSTAT_FIELDS, ThermostatListQuery, ThermostatQuery};
pub use setpoint::{SetpointCommand, SetpointUpdate};
pub use state::{StateCommand, StateUpdate};

use std::fmt;

/// Vendor object holding thermostat readings and settings.
pub const THERMOSTAT_OBJECT: &str = "Thermostat";

/// Name of the thermostat object on writes. The write path addresses it in
/// lowercase.
pub const THERMOSTAT_WRITE_OBJECT: &str = "thermostat";

/// Whether a request reads or writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Read fields.
    Get,
    /// Write fields.
    Set,
}

impl RequestKind {
    /// Returns the value of the `request` query parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request that can be sent to the Pelican API.
pub trait Command {
    /// Returns whether this request reads or writes.
    fn request(&self) -> RequestKind;

    /// Returns the vendor object this request targets.
    fn object(&self) -> &'static str;

    /// Returns the `selection` parameter, if any.
    fn selection(&self) -> Option<String>;

    /// Returns the `value` parameter.
    ///
    /// For reads this is the `;`-separated list of requested fields, for
    /// writes the encoded [`ValueClause`].
    fn value(&self) -> String;

    /// Returns the query parameters for this request, without credentials.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("request", self.request().as_str().to_string()),
            ("object", self.object().to_string()),
        ];
        if let Some(selection) = self.selection() {
            pairs.push(("selection", selection));
        }
        pairs.push(("value", self.value()));
        pairs
    }
}
