// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Site-level responses used by discovery.

use serde::Deserialize;

/// Response to a [`SiteQuery`](crate::command::SiteQuery).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteResponse {
    /// `1` on success, `0` on failure.
    pub success: i32,
    /// Failure description.
    pub message: String,
    /// Requested site attributes.
    pub attribute: Option<SiteAttributes>,
}

impl SiteResponse {
    /// Returns the site's IANA timezone name, if reported.
    #[must_use]
    pub fn time_zone(&self) -> Option<&str> {
        self.attribute
            .as_ref()
            .map(|a| a.time_zone.as_str())
            .filter(|tz| !tz.is_empty())
    }
}

/// Site attributes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteAttributes {
    /// IANA timezone name, e.g. `America/Chicago`.
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

/// Response to a [`ThermostatListQuery`](crate::command::ThermostatListQuery).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThermostatListResponse {
    /// `1` on success, `0` on failure.
    pub success: i32,
    /// Failure description.
    pub message: String,
    /// One entry per thermostat on the site.
    #[serde(rename = "Thermostat")]
    pub thermostats: Vec<ThermostatInfo>,
}

/// Name and description of a thermostat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThermostatInfo {
    /// Thermostat name, used for selection.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_site_timezone() {
        let xml = "<result><success>1</success><attribute><timeZone>America/Denver</timeZone></attribute></result>";
        let response: SiteResponse = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(response.time_zone(), Some("America/Denver"));
    }

    #[test]
    fn empty_timezone_is_none() {
        let xml = "<result><success>1</success><attribute><timeZone></timeZone></attribute></result>";
        let response: SiteResponse = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(response.time_zone(), None);
    }

    #[test]
    fn decode_thermostat_list() {
        let xml = "<result>\
            <Thermostat><name>Lobby</name><description>Front desk</description></Thermostat>\
            <Thermostat><name>Office</name><description></description></Thermostat>\
            <success>1</success></result>";
        let response: ThermostatListResponse = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(response.thermostats.len(), 2);
        assert_eq!(response.thermostats[0].name, "Lobby");
        assert_eq!(response.thermostats[1].description, "");
    }
}
