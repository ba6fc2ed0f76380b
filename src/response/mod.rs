// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed records for Pelican XML responses.
//!
//! Every vendor response is a `<result>` envelope carrying a `success` flag,
//! an optional `message`, and object-specific children. Each vendor object
//! gets its own record type so that stringly-typed field access stays inside
//! this module. Decoding happens in one place,
//! [`VendorResponse::parse`](crate::protocol::VendorResponse::parse).

mod history;
mod site;
mod thermostat;

pub use history::{HistoryRecord, HistoryRecords, HistoryResponse};
pub use site::{SiteAttributes, SiteResponse, ThermostatInfo, ThermostatListResponse};
pub use thermostat::{ThermostatReading, ThermostatResponse, UNREACHABLE_STATUS, WriteResponse};

use crate::error::Error;

/// Common envelope of every vendor response.
pub trait VendorResult {
    /// Returns the raw `success` flag.
    fn success_flag(&self) -> i32;

    /// Returns the vendor message, empty when absent.
    fn message(&self) -> &str;

    /// Returns whether the vendor reported success.
    fn is_success(&self) -> bool {
        self.success_flag() != 0
    }

    /// Converts a `success == 0` envelope into [`Error::Vendor`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Vendor` carrying the vendor message.
    fn ensure_success(&self) -> Result<(), Error> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::Vendor {
                message: self.message().to_string(),
            })
        }
    }
}

macro_rules! impl_vendor_result {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl VendorResult for $ty {
                fn success_flag(&self) -> i32 {
                    self.success
                }

                fn message(&self) -> &str {
                    &self.message
                }
            }
        )+
    };
}

impl_vendor_result!(
    ThermostatResponse,
    WriteResponse,
    HistoryResponse,
    SiteResponse,
    ThermostatListResponse,
);
