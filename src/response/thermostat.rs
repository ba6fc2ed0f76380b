// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Thermostat` object responses.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// `statusDisplay` value reported when the cloud has lost the thermostat.
pub const UNREACHABLE_STATUS: &str = "Unreachable";

/// Response to a current-reading query.
///
/// # Examples
///
/// ```
/// use pelican_lib::response::ThermostatResponse;
///
/// let xml = r#"<result>
///     <Thermostat>
///         <temperature>71.5</temperature>
///         <humidity>40</humidity>
///         <runStatus>Cool-Stage1</runStatus>
///     </Thermostat>
///     <success>1</success>
/// </result>"#;
/// let response: ThermostatResponse = quick_xml::de::from_str(xml).unwrap();
/// let reading = response.thermostat.unwrap();
/// assert_eq!(reading.temperature, 71.5);
/// assert_eq!(reading.run_status, "Cool-Stage1");
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThermostatResponse {
    /// `1` on success, `0` on failure.
    pub success: i32,
    /// Failure description.
    pub message: String,
    /// The reading, absent on failure.
    #[serde(rename = "Thermostat")]
    pub thermostat: Option<ThermostatReading>,
}

/// Fields of one thermostat as returned by [`ThermostatQuery`](crate::command::ThermostatQuery).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThermostatReading {
    /// Current temperature.
    #[serde(deserialize_with = "blank_as_zero")]
    pub temperature: f64,
    /// Relative humidity, whole percent.
    #[serde(deserialize_with = "blank_as_zero")]
    pub humidity: i32,
    /// Heating setpoint, whole degrees.
    #[serde(rename = "heatSetting", deserialize_with = "blank_as_zero")]
    pub heat_setting: i32,
    /// Cooling setpoint, whole degrees.
    #[serde(rename = "coolSetting", deserialize_with = "blank_as_zero")]
    pub cool_setting: i32,
    /// Who set the current setpoints (`Schedule`, `Manual`, ...).
    #[serde(rename = "setBy")]
    pub set_by: String,
    /// Whether heat runs need the fan (`Yes`/`No`).
    #[serde(rename = "HeatNeedsFan")]
    pub heat_needs_fan: String,
    /// Configured system mode token.
    pub system: String,
    /// Current run status token.
    #[serde(rename = "runStatus")]
    pub run_status: String,
    /// Display status, [`UNREACHABLE_STATUS`] when the device is offline.
    #[serde(rename = "statusDisplay")]
    pub status_display: String,
}

impl ThermostatReading {
    /// Returns whether the vendor reported the thermostat as unreachable.
    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        self.status_display == UNREACHABLE_STATUS
    }
}

/// Decodes a numeric element, reading empty text as zero.
///
/// Offline thermostats report their numeric fields as empty elements.
fn blank_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let text = String::deserialize(deserializer)?;
    let text = text.trim();
    if text.is_empty() {
        return Ok(T::default());
    }
    text.parse().map_err(serde::de::Error::custom)
}

/// Response to a write. Only the envelope is of interest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WriteResponse {
    /// `1` on success, `0` on failure.
    pub success: i32,
    /// Failure description.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::VendorResult;

    #[test]
    fn decode_full_reading() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<result>
  <Thermostat>
    <temperature>68.4</temperature>
    <humidity>37</humidity>
    <heatSetting>67</heatSetting>
    <coolSetting>76</coolSetting>
    <setBy>Schedule</setBy>
    <HeatNeedsFan>No</HeatNeedsFan>
    <system>Auto</system>
    <runStatus>Heat-Stage1</runStatus>
    <statusDisplay>Heating</statusDisplay>
  </Thermostat>
  <success>1</success>
</result>"#;
        let response: ThermostatResponse = quick_xml::de::from_str(xml).unwrap();
        assert!(response.is_success());
        let reading = response.thermostat.unwrap();
        assert_eq!(reading.humidity, 37);
        assert_eq!(reading.heat_setting, 67);
        assert_eq!(reading.cool_setting, 76);
        assert_eq!(reading.set_by, "Schedule");
        assert_eq!(reading.heat_needs_fan, "No");
        assert_eq!(reading.system, "Auto");
        assert!(!reading.is_unreachable());
    }

    #[test]
    fn decode_failure_envelope() {
        let xml = "<result><success>0</success><message>bad session</message></result>";
        let response: ThermostatResponse = quick_xml::de::from_str(xml).unwrap();
        assert!(!response.is_success());
        assert!(response.thermostat.is_none());
        let err = response.ensure_success().unwrap_err();
        assert_eq!(err.vendor_message(), Some("bad session"));
    }

    #[test]
    fn decode_unreachable() {
        let xml = "<result><success>1</success><Thermostat><statusDisplay>Unreachable</statusDisplay></Thermostat></result>";
        let response: ThermostatResponse = quick_xml::de::from_str(xml).unwrap();
        assert!(response.thermostat.unwrap().is_unreachable());
    }

    #[test]
    fn decode_blank_numeric_fields() {
        let xml = "<result><success>1</success><Thermostat>\
                   <temperature></temperature><humidity/>\
                   <heatSetting> </heatSetting><coolSetting></coolSetting>\
                   <statusDisplay>Unreachable</statusDisplay>\
                   </Thermostat></result>";
        let response: ThermostatResponse = quick_xml::de::from_str(xml).unwrap();
        let reading = response.thermostat.unwrap();
        assert!(reading.is_unreachable());
        assert!(reading.temperature.abs() < f64::EPSILON);
        assert_eq!(reading.humidity, 0);
        assert_eq!(reading.heat_setting, 0);
        assert_eq!(reading.cool_setting, 0);
    }

    #[test]
    fn decode_non_numeric_field_fails() {
        let xml = "<result><success>1</success><Thermostat>\
                   <humidity>damp</humidity></Thermostat></result>";
        assert!(quick_xml::de::from_str::<ThermostatResponse>(xml).is_err());
    }

    #[test]
    fn decode_write_response() {
        let xml = "<result><success>1</success><message></message></result>";
        let response: WriteResponse = quick_xml::de::from_str(xml).unwrap();
        assert!(response.ensure_success().is_ok());
    }
}
