// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermostat builder.

use chrono_tz::Tz;

use crate::command::check_name;
use crate::device::Thermostat;
use crate::discovery::site_timezone;
use crate::error::{Error, ValueError};
use crate::protocol::Transport;
use crate::status::FreshnessPolicy;

/// Builder for a [`Thermostat`].
///
/// If no timezone is supplied, [`build`](Self::build) asks the site for it.
/// Use [`build_with_timezone`](Self::build_with_timezone) to skip that
/// request when the timezone is already known.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use pelican_lib::Thermostat;
/// use pelican_lib::protocol::HttpConfig;
/// use pelican_lib::status::FreshnessPolicy;
///
/// # async fn example() -> pelican_lib::Result<()> {
/// let config = HttpConfig::new("acme", "user", "secret");
///
/// // Timezone fetched from the site
/// let lobby = Thermostat::http(config.clone(), "Lobby")?.build().await?;
///
/// // Known timezone, stricter staleness threshold
/// let office = Thermostat::http(config, "Office")?
///     .with_freshness(FreshnessPolicy::default().with_stale_after(Duration::from_secs(1800)))
///     .build_with_timezone(chrono_tz::America::Denver);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ThermostatBuilder<T: Transport> {
    transport: T,
    name: String,
    timezone: Option<Tz>,
    freshness: FreshnessPolicy,
}

impl<T: Transport> ThermostatBuilder<T> {
    pub(crate) fn new(transport: T, name: impl Into<String>) -> Result<Self, ValueError> {
        let name = name.into();
        check_name(&name)?;
        Ok(Self {
            transport,
            name,
            timezone: None,
            freshness: FreshnessPolicy::default(),
        })
    }

    /// Sets the timezone history timestamps are interpreted in.
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = Some(timezone);
        self
    }

    /// Sets the history lookback and staleness threshold.
    #[must_use]
    pub fn with_freshness(mut self, freshness: FreshnessPolicy) -> Self {
        self.freshness = freshness;
        self
    }

    /// Returns the currently set timezone, if any.
    #[must_use]
    pub fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    /// Builds the thermostat, fetching the site timezone if none was set.
    ///
    /// # Errors
    ///
    /// Returns error if the site query fails, is rejected by the vendor, or
    /// names an unknown timezone.
    pub async fn build(self) -> Result<Thermostat<T>, Error> {
        let timezone = match self.timezone {
            Some(tz) => tz,
            None => site_timezone(&self.transport).await?,
        };
        Ok(Thermostat::new(
            self.transport,
            self.name,
            timezone,
            self.freshness,
        ))
    }

    /// Builds the thermostat with a known timezone, without any request.
    #[must_use]
    pub fn build_with_timezone(self, timezone: Tz) -> Thermostat<T> {
        Thermostat::new(self.transport, self.name, timezone, self.freshness)
    }
}

#[cfg(all(test, feature = "http"))]
mod tests {
    use super::*;
    use crate::protocol::{HttpClient, HttpConfig};
    use chrono_tz::America::Phoenix;

    fn builder() -> ThermostatBuilder<HttpClient> {
        Thermostat::http(HttpConfig::new("acme", "u", "p"), "Lobby").unwrap()
    }

    #[test]
    fn builder_defaults() {
        let builder = builder();
        assert!(builder.timezone().is_none());
        assert_eq!(builder.freshness, FreshnessPolicy::default());
    }

    #[test]
    fn name_with_terminator_rejected() {
        let err = Thermostat::http(HttpConfig::new("acme", "u", "p"), "Lobby;system:Off").unwrap_err();
        assert!(matches!(err, Error::Value(ValueError::InvalidName(_))));
    }

    #[test]
    fn builder_with_timezone() {
        let builder = builder().with_timezone(Phoenix);
        assert_eq!(builder.timezone(), Some(Phoenix));
    }

    #[tokio::test]
    async fn build_with_preset_timezone_makes_no_request() {
        // The site host does not resolve in tests; reaching it would fail.
        let thermostat = builder().with_timezone(Phoenix).build().await.unwrap();
        assert_eq!(thermostat.name(), "Lobby");
        assert_eq!(thermostat.timezone(), Phoenix);
    }

    #[test]
    fn build_with_timezone_keeps_freshness() {
        let policy = FreshnessPolicy::default().with_stale_after(std::time::Duration::from_secs(60));
        let thermostat = builder().with_freshness(policy).build_with_timezone(Phoenix);
        assert_eq!(thermostat.freshness(), policy);
    }
}
