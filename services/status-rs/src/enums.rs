//! Record status codes shared by every service that persists a status column.
//!
//! Each status carries a one-character external value (`"A"`, `"P"`, `"D"`)
//! used in storage and on the wire. Reading an external value back never fails:
//! anything unrecognized falls back to [`Status::Pending`].
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatusError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Status {
    #[serde(rename = "A")]
    Active,
    #[default]
    #[serde(rename = "P")]
    Pending,
    #[serde(rename = "D")]
    Deleted,
}

impl Status {
    /// All statuses in declaration order. Resolution walks this slice.
    pub const ALL: [Status; 3] = [Status::Active, Status::Pending, Status::Deleted];

    /// Single-character external value written to storage.
    pub const fn value(self) -> &'static str {
        match self {
            Self::Active => "A",
            Self::Pending => "P",
            Self::Deleted => "D",
        }
    }

    /// Canonical name, e.g. `"ACTIVE"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Pending => "PENDING",
            Self::Deleted => "DELETED",
        }
    }

    /// Parse a canonical name. Names are matched exactly.
    pub fn from_name(name: &str) -> Result<Self, StatusError> {
        Self::ALL
            .into_iter()
            .find(|status| status.name() == name)
            .ok_or_else(|| StatusError::UnknownName(name.to_string()))
    }

    /// Case-insensitive match of `input` against each external value.
    /// The whole input must match; there is no prefix matching.
    pub fn lookup(input: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.value().eq_ignore_ascii_case(input))
    }

    /// Resolve an external value, falling back to [`Status::Pending`] for
    /// empty, multi-character or unrecognized input.
    ///
    /// Callers cannot tell an explicit `"P"` from a fallback here; use
    /// [`Status::lookup`] or [`str::parse`] when that distinction matters.
    pub fn resolve(input: &str) -> Self {
        match Self::lookup(input) {
            Some(status) => status,
            None => {
                tracing::debug!(
                    input = %input,
                    fallback = Self::Pending.name(),
                    "unrecognized status code"
                );
                Self::Pending
            }
        }
    }

    /// [`Status::resolve`] returning the canonical name.
    pub fn resolve_name(input: &str) -> &'static str {
        Self::resolve(input).name()
    }

    /// Resolve a value read from a nullable source. Absent input is an error
    /// rather than a fallback.
    pub fn resolve_opt(input: Option<&str>) -> Result<Self, StatusError> {
        input.map(Self::resolve).ok_or(StatusError::InvalidArgument)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict parse of an external value.
impl FromStr for Status {
    type Err = StatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| StatusError::UnknownCode(s.to_string()))
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        Self::resolve(s)
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Self::resolve(&s)
    }
}

impl From<Status> for &'static str {
    fn from(status: Status) -> Self {
        status.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_values_are_distinct() {
        let mut values: Vec<_> = Status::ALL.iter().map(|s| s.value()).collect();
        values.sort_unstable();
        values.dedup();
        assert_eq!(values.len(), Status::ALL.len());
    }

    #[test]
    fn default_is_the_fallback() {
        assert_eq!(Status::default(), Status::resolve("?"));
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(Status::Deleted.to_string(), "DELETED");
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(Status::lookup(" a"), None);
        assert_eq!(Status::resolve("d\n"), Status::Pending);
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(Status::from_name("ACTIVE").unwrap(), Status::Active);
        assert!(matches!(
            Status::from_name("active"),
            Err(StatusError::UnknownName(name)) if name == "active"
        ));
    }
}
