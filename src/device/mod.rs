// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Long-lived handle for one Pelican thermostat.
//!
//! A [`Thermostat`] owns its transport binding, its name on the site and its
//! timezone. All three are fixed at construction.
//!
//! ```no_run
//! use pelican_lib::Thermostat;
//! use pelican_lib::command::StateUpdate;
//! use pelican_lib::protocol::HttpConfig;
//!
//! # async fn example() -> pelican_lib::Result<()> {
//! let config = HttpConfig::new("acme", "user@example.com", "secret");
//! let thermostat = Thermostat::http(config, "Lobby")?
//!     .with_timezone(chrono_tz::America::Chicago)
//!     .build()
//!     .await?;
//!
//! match thermostat.status().await? {
//!     Some(report) => println!("{:?}", report.status),
//!     None => println!("no current data, skipping this cycle"),
//! }
//!
//! thermostat
//!     .set_state(&StateUpdate::new().with_override(true).with_heat(68.0))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::ThermostatBuilder;

use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;
use tokio::sync::Mutex;

use crate::command::{
    Command, HistoryQuery, SetpointCommand, SetpointUpdate, StateCommand, StateUpdate,
    ThermostatQuery,
};
use crate::error::{Error, ParseError, ValueError};
use crate::protocol::Transport;
#[cfg(feature = "http")]
use crate::protocol::{HttpClient, HttpConfig};
use crate::response::{HistoryResponse, ThermostatResponse, VendorResult, WriteResponse};
use crate::status::{FreshnessPolicy, StatusReport, ThermostatStatus};
use crate::types::parse_history_timestamp;

/// A Pelican thermostat.
///
/// Cloning is cheap and clones share the transport. Writes issued through
/// any clone are serialized, since the vendor API offers no conditional
/// update to arbitrate concurrent writers.
#[derive(Debug)]
pub struct Thermostat<T: Transport> {
    inner: Arc<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    transport: T,
    name: String,
    timezone: Tz,
    freshness: FreshnessPolicy,
    write_lock: Mutex<()>,
}

impl<T: Transport> Clone for Thermostat<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "http")]
impl Thermostat<HttpClient> {
    /// Starts building a thermostat reached over HTTP.
    ///
    /// # Errors
    ///
    /// Returns error if `name` contains `;` or the HTTP client cannot be
    /// created.
    pub fn http(
        config: HttpConfig,
        name: impl Into<String>,
    ) -> Result<ThermostatBuilder<HttpClient>, Error> {
        Ok(ThermostatBuilder::new(config.into_client()?, name)?)
    }
}

impl<T: Transport> Thermostat<T> {
    /// Starts building a thermostat over an arbitrary transport.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidName` if `name` contains `;`, which would
    /// corrupt the selection clause of every request.
    pub fn builder(transport: T, name: impl Into<String>) -> Result<ThermostatBuilder<T>, ValueError> {
        ThermostatBuilder::new(transport, name)
    }

    pub(crate) fn new(transport: T, name: String, timezone: Tz, freshness: FreshnessPolicy) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                name,
                timezone,
                freshness,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Returns the thermostat name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the timezone history timestamps are interpreted in.
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.inner.timezone
    }

    /// Returns the freshness policy.
    #[must_use]
    pub fn freshness(&self) -> FreshnessPolicy {
        self.inner.freshness
    }

    /// Polls the current status.
    ///
    /// Returns `Ok(None)` when the thermostat is reported unreachable or has
    /// no history records in the lookback window. Callers should skip the
    /// cycle in that case. A snapshot whose newest history record is older
    /// than the staleness threshold is still returned, with
    /// [`StatusReport::staleness`] set.
    ///
    /// # Errors
    ///
    /// - `Error::Protocol` if either request fails in transit
    /// - `Error::Vendor` if either response reports `success == 0`
    /// - `Error::Parse` if a response does not decode or carries an
    ///   unparsable history timestamp
    pub async fn status(&self) -> Result<Option<StatusReport>, Error> {
        let name = self.name();
        let tz = self.timezone();

        let current: ThermostatResponse = self
            .inner
            .transport
            .send(&ThermostatQuery::new(name))
            .await?
            .parse()?;
        current.ensure_success()?;

        let reading = current
            .thermostat
            .ok_or_else(|| ParseError::MissingField("Thermostat".to_string()))?;
        if reading.is_unreachable() {
            tracing::info!(thermostat = name, "Thermostat is unreachable");
            return Ok(None);
        }

        let now = Utc::now();
        let status = ThermostatStatus::from_reading(&reading, now);

        let query = HistoryQuery::trailing(name, now, self.inner.freshness.history_window, tz);
        let history: HistoryResponse = self.inner.transport.send(&query).await?.parse()?;
        history.ensure_success()?;

        let Some(latest) = history.latest() else {
            tracing::debug!(
                thermostat = name,
                start = query.start(),
                end = query.end(),
                "No history records in window"
            );
            return Ok(None);
        };

        let last_report = parse_history_timestamp(&latest.timestamp, tz)?;
        let staleness = self
            .inner
            .freshness
            .check(last_report.with_timezone(&Utc), now);
        if let Some(stale) = &staleness {
            tracing::warn!(
                thermostat = name,
                last_report = %last_report,
                age_minutes = stale.age.num_minutes(),
                "Thermostat data has not changed within the staleness threshold; this is not necessarily an error"
            );
        }

        Ok(Some(StatusReport {
            status,
            last_report,
            staleness,
        }))
    }

    /// Writes heat and/or cool setpoints, truncated to whole degrees.
    ///
    /// # Errors
    ///
    /// - `Error::Value` if a setpoint is not finite; nothing is sent
    /// - `Error::Protocol` if the request fails in transit
    /// - `Error::Vendor` if the vendor rejects the write
    pub async fn set_setpoints(&self, update: &SetpointUpdate) -> Result<(), Error> {
        let command = SetpointCommand::encode(self.name(), update)?;
        self.write(&command).await
    }

    /// Writes mode, schedule override, fan and setpoints.
    ///
    /// An update with no fields still issues a (no-op) write.
    ///
    /// # Errors
    ///
    /// - `Error::Value` if the mode is outside `[0, 3]` or a setpoint is not
    ///   finite; nothing is sent
    /// - `Error::Protocol` if the request fails in transit
    /// - `Error::Vendor` if the vendor rejects the write
    pub async fn set_state(&self, update: &StateUpdate) -> Result<(), Error> {
        let command = StateCommand::encode(self.name(), update)?;
        self.write(&command).await
    }

    async fn write<C: Command + Sync>(&self, command: &C) -> Result<(), Error> {
        let _guard = self.inner.write_lock.lock().await;
        let response: WriteResponse = self.inner.transport.send(command).await?.parse()?;
        response.ensure_success()
    }
}
