// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Configured system mode of a thermostat.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Vendor `system` tokens, indexed by canonical mode number.
const MODE_TOKENS: [&str; 4] = ["Off", "Heat", "Cool", "Auto"];

/// The system mode a thermostat is configured for.
///
/// This is independent of what the thermostat is currently doing; see
/// [`RunState`](crate::types::RunState). A device in [`SystemMode::Auto`] may
/// be cooling, heating or idle.
///
/// # Examples
///
/// ```
/// use pelican_lib::types::SystemMode;
///
/// let mode = SystemMode::try_from(2).unwrap();
/// assert_eq!(mode, SystemMode::Cool);
/// assert_eq!(mode.as_str(), "Cool");
/// assert_eq!("Cool".parse::<SystemMode>().unwrap().index(), 2);
///
/// assert!(SystemMode::try_from(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize)]
#[serde(into = "i32")]
pub enum SystemMode {
    /// System disabled.
    #[default]
    Off,
    /// Heating only.
    Heat,
    /// Cooling only.
    Cool,
    /// Heat or cool as needed.
    Auto,
}

impl SystemMode {
    const ALL: [Self; 4] = [Self::Off, Self::Heat, Self::Cool, Self::Auto];

    /// Returns the vendor token for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => MODE_TOKENS[0],
            Self::Heat => MODE_TOKENS[1],
            Self::Cool => MODE_TOKENS[2],
            Self::Auto => MODE_TOKENS[3],
        }
    }

    /// Returns the canonical mode number (0-3).
    #[must_use]
    pub const fn index(&self) -> i32 {
        match self {
            Self::Off => 0,
            Self::Heat => 1,
            Self::Cool => 2,
            Self::Auto => 3,
        }
    }

    /// Decodes a vendor `system` token, treating unknown tokens as `Off`.
    ///
    /// Status snapshots use this lenient form: a thermostat reporting a mode
    /// outside the known vocabulary is reported as off rather than failing
    /// the whole reading.
    #[must_use]
    pub fn from_token_lossy(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            tracing::debug!(token, "Unrecognized system mode token, reporting Off");
            Self::Off
        })
    }
}

impl TryFrom<i32> for SystemMode {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(ValueError::InvalidMode(value))
    }
}

impl From<SystemMode> for i32 {
    fn from(mode: SystemMode) -> Self {
        mode.index()
    }
}

impl FromStr for SystemMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MODE_TOKENS
            .iter()
            .position(|token| *token == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| ValueError::InvalidToken {
                kind: "system mode",
                token: s.to_string(),
            })
    }
}

impl fmt::Display for SystemMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
