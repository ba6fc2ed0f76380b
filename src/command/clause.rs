// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The vendor `key:value;` mini-language.

use std::fmt::{self, Write as _};

use crate::error::ValueError;

/// An ordered sequence of `key:value;` pairs.
///
/// Pairs are emitted in insertion order and each one is `;`-terminated.
/// There is no escaping: values must not contain `;`. Every value this
/// crate writes is a number or a fixed token. Selection clauses may carry
/// `:` inside values (RFC 3339 times), which the vendor accepts because it
/// splits each pair on the first `:` only.
///
/// # Examples
///
/// ```
/// use pelican_lib::command::ValueClause;
///
/// let mut clause = ValueClause::new();
/// clause.push("heatSetting", 68);
/// clause.push("coolSetting", 74);
/// assert_eq!(clause.as_str(), "heatSetting:68;coolSetting:74;");
/// assert!(ValueClause::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueClause(String);

impl ValueClause {
    /// Creates an empty clause.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `key:value;` pair.
    pub fn push(&mut self, key: &str, value: impl fmt::Display) {
        debug_assert!(!key.contains([':', ';']), "invalid clause key {key:?}");
        let start = self.0.len() + key.len() + 1;
        // Writing into a String cannot fail.
        let _ = write!(self.0, "{key}:{value};");
        debug_assert!(
            !self.0[start..self.0.len() - 1].contains(';'),
            "clause value for {key:?} contains ';'"
        );
    }

    /// Appends a pair only when `value` is present.
    pub fn push_opt<V: fmt::Display>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Returns the encoded clause.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether no pairs have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Checks that a thermostat name can be used as a selection value.
///
/// # Errors
///
/// Returns `ValueError::InvalidName` if `name` contains `;`.
pub fn check_name(name: &str) -> Result<(), ValueError> {
    if name.contains(';') {
        return Err(ValueError::InvalidName(name.to_string()));
    }
    Ok(())
}

impl fmt::Display for ValueClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ValueClause> for String {
    fn from(clause: ValueClause) -> Self {
        clause.0
    }
}
