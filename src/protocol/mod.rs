// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport to the Pelican cloud API.
//!
//! The vendor exposes a single `api.cgi` endpoint per site. Reads and writes
//! are both parameterized GET requests returning an XML envelope.
//!
//! - [`Transport`]: the seam the rest of the crate talks to
//! - [`HttpClient`]: the `reqwest` implementation

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use crate::command::Command;
use crate::error::{ParseError, ProtocolError};

/// Raw response from the vendor endpoint.
#[derive(Debug, Clone)]
pub struct VendorResponse {
    /// The raw XML response body.
    body: String,
}

impl VendorResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw XML response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the XML envelope into a typed record.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Xml` if the body does not decode into `T`.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        quick_xml::de::from_str(&self.body).map_err(Into::into)
    }
}

/// Something that can deliver a [`Command`] to the vendor endpoint.
///
/// Implementations perform no retries. Timeouts and cancellation are their
/// own concern; any failure is returned to the caller as-is.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a command and returns the undecoded response.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request cannot be delivered or the HTTP
    /// exchange does not succeed.
    async fn send<C: Command + Sync>(&self, command: &C) -> Result<VendorResponse, ProtocolError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{VendorResult, WriteResponse};

    #[test]
    fn parse_decodes_envelope() {
        let response = VendorResponse::new("<result><success>1</success></result>".to_string());
        let parsed: WriteResponse = response.parse().unwrap();
        assert!(parsed.is_success());
    }

    #[test]
    fn parse_rejects_malformed_xml() {
        let response = VendorResponse::new("<result><success>one</success></result>".to_string());
        let parsed: Result<WriteResponse, _> = response.parse();
        assert!(matches!(parsed, Err(ParseError::Xml(_))));
    }
}
