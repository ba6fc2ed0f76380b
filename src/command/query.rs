// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read queries.

use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::command::{Command, RequestKind, THERMOSTAT_OBJECT, ValueClause};
use crate::types::format_bound;

/// Fields requested for a current reading, in request order.
pub const THERMOSTAT_FIELDS: [&str; 9] = [
    "temperature",
    "humidity",
    "heatSetting",
    "coolSetting",
    "setBy",
    "HeatNeedsFan",
    "system",
    "runStatus",
    "statusDisplay",
];

fn name_selection(name: &str) -> ValueClause {
    let mut selection = ValueClause::new();
    selection.push("name", name);
    selection
}

/// Query for the current reading of one thermostat.
///
/// # Examples
///
/// ```
/// use pelican_lib::command::{Command, ThermostatQuery};
///
/// let query = ThermostatQuery::new("Lobby");
/// assert_eq!(query.object(), "Thermostat");
/// assert_eq!(query.selection(), Some("name:Lobby;".to_string()));
/// assert!(query.value().starts_with("temperature;humidity;"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThermostatQuery {
    name: String,
}

impl ThermostatQuery {
    /// Creates a query for the thermostat called `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Command for ThermostatQuery {
    fn request(&self) -> RequestKind {
        RequestKind::Get
    }

    fn object(&self) -> &'static str {
        THERMOSTAT_OBJECT
    }

    fn selection(&self) -> Option<String> {
        Some(name_selection(&self.name).into())
    }

    fn value(&self) -> String {
        THERMOSTAT_FIELDS.join(";")
    }
}

/// Query for history record timestamps of one thermostat within a window.
///
/// Bounds are formatted as RFC 3339 in the thermostat's timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    name: String,
    start: String,
    end: String,
}

impl HistoryQuery {
    /// Creates a query for the window `[now - window, now]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use chrono::{TimeZone, Utc};
    /// use pelican_lib::command::{Command, HistoryQuery};
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    /// let query = HistoryQuery::trailing("Lobby", now, Duration::from_secs(3600), chrono_tz::UTC);
    /// assert_eq!(
    ///     query.selection().unwrap(),
    ///     "name:Lobby;startDateTime:2024-01-15T11:00:00Z;endDateTime:2024-01-15T12:00:00Z;"
    /// );
    /// assert_eq!(query.value(), "timestamp");
    /// ```
    #[must_use]
    pub fn trailing(name: impl Into<String>, now: DateTime<Utc>, window: Duration, tz: Tz) -> Self {
        let start = chrono::Duration::from_std(window)
            .ok()
            .and_then(|w| now.checked_sub_signed(w))
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        Self {
            name: name.into(),
            start: format_bound(start, tz),
            end: format_bound(now, tz),
        }
    }

    /// Returns the formatted start bound.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the formatted end bound.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }
}

impl Command for HistoryQuery {
    fn request(&self) -> RequestKind {
        RequestKind::Get
    }

    fn object(&self) -> &'static str {
        "ThermostatHistory"
    }

    fn selection(&self) -> Option<String> {
        let mut selection = name_selection(&self.name);
        selection.push("startDateTime", &self.start);
        selection.push("endDateTime", &self.end);
        Some(selection.into())
    }

    fn value(&self) -> String {
        "timestamp".to_string()
    }
}

/// Query for the site's configured timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiteQuery;

impl Command for SiteQuery {
    fn request(&self) -> RequestKind {
        RequestKind::Get
    }

    fn object(&self) -> &'static str {
        "Site"
    }

    fn selection(&self) -> Option<String> {
        None
    }

    fn value(&self) -> String {
        "timeZone;".to_string()
    }
}

/// Query listing every thermostat on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThermostatListQuery;

impl Command for ThermostatListQuery {
    fn request(&self) -> RequestKind {
        RequestKind::Get
    }

    fn object(&self) -> &'static str {
        THERMOSTAT_OBJECT
    }

    fn selection(&self) -> Option<String> {
        None
    }

    fn value(&self) -> String {
        "name;description".to_string()
    }
}
