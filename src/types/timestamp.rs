// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Timestamp handling for history queries.
//!
//! History request bounds are sent as RFC 3339 in the thermostat's
//! timezone. History records come back as `YYYY-MM-DDThh:mm` with no seconds
//! and no offset; they are local times in the same timezone.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use chrono_tz::America::New_York;
//! use pelican_lib::types::{format_bound, parse_history_timestamp};
//!
//! let instant = Utc.with_ymd_and_hms(2024, 1, 15, 15, 30, 0).unwrap();
//! assert_eq!(format_bound(instant, New_York), "2024-01-15T10:30:00-05:00");
//!
//! let parsed = parse_history_timestamp("2024-01-15T10:30", New_York).unwrap();
//! assert_eq!(parsed.with_timezone(&Utc), instant);
//! ```

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ParseError;

/// Layout of history record timestamps.
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formats an instant as an RFC 3339 request bound in `tz`.
#[must_use]
pub fn format_bound(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses a history record timestamp as a local time in `tz`.
///
/// Local times that occur twice (DST fall-back) resolve to the earlier
/// instant.
///
/// # Errors
///
/// Returns `ParseError::InvalidTimestamp` if the text does not match
/// [`HISTORY_TIMESTAMP_FORMAT`] or names a local time skipped by a DST
/// transition.
pub fn parse_history_timestamp(value: &str, tz: Tz) -> Result<DateTime<Tz>, ParseError> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), HISTORY_TIMESTAMP_FORMAT).map_err(
        |e| ParseError::InvalidTimestamp {
            value: value.to_string(),
            message: e.to_string(),
        },
    )?;

    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| ParseError::InvalidTimestamp {
            value: value.to_string(),
            message: format!("local time does not exist in {tz}"),
        })
}

/// Resolves an IANA timezone name such as `"America/Chicago"`.
///
/// # Errors
///
/// Returns `ParseError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, ParseError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ParseError::InvalidTimezone(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use chrono_tz::America::Chicago;
    use chrono_tz::UTC;

    #[test]
    fn parses_local_minutes() {
        let ts = parse_history_timestamp("2023-07-04T09:05", Chicago).unwrap();
        assert_eq!(ts.hour(), 9);
        assert_eq!(ts.minute(), 5);
        assert_eq!(ts.second(), 0);
        assert_eq!(ts.timezone(), Chicago);
    }

    #[test]
    fn rejects_seconds_and_garbage() {
        assert!(parse_history_timestamp("2023-07-04T09:05:00", Chicago).is_err());
        assert!(parse_history_timestamp("yesterday", Chicago).is_err());
        assert!(parse_history_timestamp("", Chicago).is_err());
    }

    #[test]
    fn rejects_skipped_local_time() {
        let err = parse_history_timestamp("2024-03-10T02:30", Chicago).unwrap_err();
        assert!(matches!(err, ParseError::InvalidTimestamp { .. }));
    }

    #[test]
    fn utc_bound_uses_z() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(format_bound(instant, UTC), "2024-06-01T12:00:00Z");
    }

    #[test]
    fn timezone_names() {
        assert_eq!(parse_timezone("America/Chicago").unwrap(), Chicago);
        assert!(matches!(
            parse_timezone("Mars/Olympus"),
            Err(ParseError::InvalidTimezone(_))
        ));
    }
}
