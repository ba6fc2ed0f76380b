// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `pelican_lib` library.
//!
//! Four kinds of failure are distinguished:
//!
//! - [`ProtocolError`]: the vendor endpoint could not be reached or answered
//!   with a non-success HTTP status.
//! - [`Error::Vendor`]: the vendor answered, but its payload reported
//!   `success == 0`.
//! - [`ParseError`]: the payload decoded, but violated an expected invariant
//!   (unparsable timestamp, unknown timezone, malformed XML).
//! - [`ValueError`]: a caller-supplied value is outside its accepted domain.
//!
//! None of these are retried inside the library.
//!
//! An unreachable thermostat, or one without recent history, is *not* an
//! error: status queries return `Ok(None)` for that case.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied value was rejected before any request was made.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The request could not be delivered or the HTTP exchange failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The vendor response could not be interpreted.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The vendor answered with `success == 0`.
    #[error("vendor error: {message}")]
    Vendor {
        /// The message supplied by the vendor, possibly empty.
        message: String,
    },
}

impl Error {
    /// Returns the vendor-supplied message if this is a [`Error::Vendor`].
    #[must_use]
    pub fn vendor_message(&self) -> Option<&str> {
        match self {
            Self::Vendor { message } => Some(message),
            _ => None,
        }
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValueError {
    /// A system mode index outside `[0, 3]`.
    #[error("thermostat mode {0} is out of range [0, 3]")]
    InvalidMode(i32),

    /// A setpoint that cannot be truncated to a whole degree.
    #[error("setpoint {0} is not a finite number")]
    NonFiniteSetpoint(f64),

    /// A thermostat name that cannot be carried in a selection clause.
    #[error("thermostat name {0:?} contains ';'")]
    InvalidName(String),

    /// A vendor token that does not belong to the expected vocabulary.
    #[error("invalid {kind} token: {token}")]
    InvalidToken {
        /// Which vocabulary the token was checked against.
        kind: &'static str,
        /// The rejected token.
        token: String,
    },
}

/// Errors related to HTTP communication with the vendor endpoint.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or site name.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to interpreting vendor responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML decoding failed.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// Expected element is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// A history timestamp did not match `YYYY-MM-DDThh:mm`.
    #[error("failed to parse timestamp {value:?}: {message}")]
    InvalidTimestamp {
        /// The raw timestamp text.
        value: String,
        /// Description of the parsing failure.
        message: String,
    },

    /// The site reported a timezone name that is not a known IANA zone.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
