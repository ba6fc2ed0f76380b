// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ThermostatHistory` object responses.

use serde::Deserialize;

/// Response to a [`HistoryQuery`](crate::command::HistoryQuery).
///
/// # Examples
///
/// ```
/// use pelican_lib::response::HistoryResponse;
///
/// let xml = r#"<result>
///     <success>1</success>
///     <ThermostatHistory>
///         <name>Lobby</name>
///         <History><timestamp>2024-01-15T10:00</timestamp></History>
///         <History><timestamp>2024-01-15T10:30</timestamp></History>
///     </ThermostatHistory>
/// </result>"#;
/// let response: HistoryResponse = quick_xml::de::from_str(xml).unwrap();
/// assert_eq!(response.latest().unwrap().timestamp, "2024-01-15T10:30");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HistoryResponse {
    /// `1` on success, `0` on failure.
    pub success: i32,
    /// Failure description.
    pub message: String,
    /// Records of the selected thermostat.
    #[serde(rename = "ThermostatHistory")]
    pub records: Option<HistoryRecords>,
}

impl HistoryResponse {
    /// Returns the most recent record, i.e. the last one in the response.
    #[must_use]
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.as_ref().and_then(|r| r.history.last())
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.as_ref().map_or(0, |r| r.history.len())
    }

    /// Returns whether the window held no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// History records of one thermostat, oldest first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HistoryRecords {
    /// Thermostat name.
    pub name: String,
    /// Records in chronological order.
    #[serde(rename = "History")]
    pub history: Vec<HistoryRecord>,
}

/// A single history record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryRecord {
    /// Local time `YYYY-MM-DDThh:mm` in the thermostat's timezone.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window() {
        let xml = "<result><success>1</success><ThermostatHistory><name>Lobby</name></ThermostatHistory></result>";
        let response: HistoryResponse = quick_xml::de::from_str(xml).unwrap();
        assert!(response.is_empty());
        assert!(response.latest().is_none());
    }

    #[test]
    fn missing_history_object() {
        let xml = "<result><success>1</success></result>";
        let response: HistoryResponse = quick_xml::de::from_str(xml).unwrap();
        assert!(response.is_empty());
    }

    #[test]
    fn latest_is_last_record() {
        let xml = "<result><success>1</success><ThermostatHistory>\
            <History><timestamp>2024-01-15T09:00</timestamp></History>\
            <History><timestamp>2024-01-15T09:15</timestamp></History>\
            <History><timestamp>2024-01-15T09:45</timestamp></History>\
            </ThermostatHistory></result>";
        let response: HistoryResponse = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(response.len(), 3);
        assert_eq!(response.latest().unwrap().timestamp, "2024-01-15T09:45");
    }
}
