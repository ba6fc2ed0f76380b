// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Site discovery for Pelican thermostats.
//!
//! A site lists its thermostats through the `Thermostat` object and reports
//! its timezone through the `Site` object. Discovery combines the two into
//! one ready [`Thermostat`] handle per named entry.
//!
//! # Examples
//!
//! ```no_run
//! use pelican_lib::discovery::discover;
//! use pelican_lib::protocol::HttpConfig;
//!
//! # async fn example() -> pelican_lib::Result<()> {
//! let config = HttpConfig::new("acme", "user@example.com", "secret");
//! for thermostat in discover(config).await? {
//!     println!("{} ({})", thermostat.name(), thermostat.timezone());
//! }
//! # Ok(())
//! # }
//! ```

use chrono_tz::Tz;

use crate::command::{SiteQuery, ThermostatListQuery, check_name};
use crate::device::Thermostat;
use crate::error::{Error, ParseError};
#[cfg(feature = "http")]
use crate::protocol::{HttpClient, HttpConfig};
use crate::protocol::Transport;
use crate::response::{SiteResponse, ThermostatListResponse, VendorResult};
use crate::status::FreshnessPolicy;
use crate::types::parse_timezone;

/// Fetches the site's configured timezone.
///
/// # Errors
///
/// Returns error if the request fails, the vendor rejects it, the response
/// has no timezone, or the timezone name is unknown.
pub async fn site_timezone<T: Transport>(transport: &T) -> Result<Tz, Error> {
    let response: SiteResponse = transport.send(&SiteQuery).await?.parse()?;
    response.ensure_success()?;

    let name = response
        .time_zone()
        .ok_or_else(|| ParseError::MissingField("timeZone".to_string()))?;
    Ok(parse_timezone(name)?)
}

/// Discovers every thermostat on the site reachable through `transport`.
///
/// Entries without a name, or whose name contains `;`, are skipped. All handles share the transport and
/// the site timezone, and use the default [`FreshnessPolicy`].
///
/// # Errors
///
/// Returns error if either site request fails or is rejected, or if the site
/// timezone is missing or unknown.
pub async fn discover_with<T: Transport + Clone>(transport: T) -> Result<Vec<Thermostat<T>>, Error> {
    let listing: ThermostatListResponse = transport.send(&ThermostatListQuery).await?.parse()?;
    listing.ensure_success()?;

    let timezone = site_timezone(&transport).await?;

    let thermostats: Vec<_> = listing
        .thermostats
        .into_iter()
        .filter(|info| !info.name.is_empty())
        .filter(|info| match check_name(&info.name) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping thermostat");
                false
            }
        })
        .map(|info| {
            tracing::debug!(name = %info.name, description = %info.description, "Discovered thermostat");
            Thermostat::new(
                transport.clone(),
                info.name,
                timezone,
                FreshnessPolicy::default(),
            )
        })
        .collect();

    tracing::info!(count = thermostats.len(), timezone = %timezone, "Pelican discovery completed");

    Ok(thermostats)
}

/// Discovers every thermostat on an HTTP site.
///
/// # Errors
///
/// Returns error if the HTTP client cannot be created, or for any reason
/// listed on [`discover_with`].
#[cfg(feature = "http")]
pub async fn discover(config: HttpConfig) -> Result<Vec<Thermostat<HttpClient>>, Error> {
    discover_with(config.into_client()?).await
}
