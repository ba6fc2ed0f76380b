// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `pelican_lib` - A Rust library to read and control Pelican cloud thermostats.
//!
//! The Pelican API speaks ad-hoc XML over HTTP with string-encoded
//! enumerations. This library turns it into a small, strongly-typed model:
//!
//! - **Status**: one [`ThermostatStatus`] snapshot per poll, fused from the
//!   current reading and the recent history, with stale devices flagged.
//! - **Commands**: sparse setpoint and state updates encoded into the
//!   vendor's `key:value;` clause in a fixed field order.
//! - **Discovery**: enumerate the thermostats of a site together with the
//!   site timezone.
//!
//! # Quick Start
//!
//! ```no_run
//! use pelican_lib::{Thermostat, SystemMode};
//! use pelican_lib::command::StateUpdate;
//! use pelican_lib::protocol::HttpConfig;
//!
//! #[tokio::main]
//! async fn main() -> pelican_lib::Result<()> {
//!     let config = HttpConfig::new("acme", "user@example.com", "secret");
//!     let thermostat = Thermostat::http(config, "Lobby")?.build().await?;
//!
//!     if let Some(report) = thermostat.status().await? {
//!         println!(
//!             "{:.1} degrees, {:?} in {:?} mode",
//!             report.status.temperature, report.status.state, report.status.mode
//!         );
//!         if report.is_stale() {
//!             println!("no change recorded recently");
//!         }
//!     }
//!
//!     thermostat
//!         .set_state(&StateUpdate::new().with_mode(SystemMode::Cool).with_cool(74.0))
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod command;
mod device;
pub mod discovery;
pub mod error;
pub mod protocol;
pub mod response;
pub mod status;
pub mod types;

pub use command::{SetpointUpdate, StateUpdate};
pub use device::{Thermostat, ThermostatBuilder};
pub use error::{Error, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{Transport, VendorResponse};
pub use status::{FreshnessPolicy, Staleness, StatusReport, ThermostatStatus};
pub use types::{FanSetting, RunState, ScheduleState, Setpoint, SystemMode};
