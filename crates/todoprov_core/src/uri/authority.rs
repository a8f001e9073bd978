//! Validated provider authority prefix.
//!
//! # Responsibility
//! - Hold the immutable `scheme://host[/path]` prefix every URI starts with.
//! - Normalize equivalent spellings to one canonical form.
//!
//! # Invariants
//! - A constructed `Authority` never ends in `/` and never contains
//!   whitespace or empty path segments.
//! - Deserialization runs the same validation as `Authority::new`.

use crate::uri::{AddressError, AddressResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static AUTHORITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9+.-]*://[^\s/]+(/[^\s/]+)*$").expect("valid authority regex")
});

/// Immutable provider prefix, e.g. `content://org.example.todo`.
///
/// Replaces process-wide prefix constants: callers construct one value and
/// pass it to the contract explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Authority(String);

impl Authority {
    /// Validates and normalizes one authority string.
    ///
    /// Surrounding whitespace and trailing `/` characters are stripped, so
    /// `content://x/` and `content://x` name the same authority.
    ///
    /// # Errors
    /// - `AddressError::EmptyAuthority` when nothing remains after trimming.
    /// - `AddressError::InvalidAuthority` when the remainder is not a
    ///   `scheme://rest` prefix with non-empty, whitespace-free segments.
    pub fn new(value: &str) -> AddressResult<Self> {
        let normalized = value.trim().trim_end_matches('/');
        if normalized.is_empty() {
            return Err(AddressError::EmptyAuthority);
        }
        if !AUTHORITY_RE.is_match(normalized) {
            return Err(AddressError::InvalidAuthority(normalized.to_string()));
        }
        Ok(Self(normalized.to_string()))
    }

    /// Returns the canonical authority string, without a trailing `/`.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for Authority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl TryFrom<String> for Authority {
    type Error = AddressError;

    fn try_from(value: String) -> AddressResult<Self> {
        Self::new(value.as_str())
    }
}

impl From<Authority> for String {
    fn from(value: Authority) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::Authority;
    use crate::uri::AddressError;

    #[test]
    fn new_strips_trailing_slashes_and_whitespace() {
        let authority = Authority::new("  content://org.example.todo/  ").unwrap();
        assert_eq!(authority.as_str(), "content://org.example.todo");
    }

    #[test]
    fn equivalent_spellings_compare_equal() {
        let bare = Authority::new("content://x.y/todo").unwrap();
        let slashed = Authority::new("content://x.y/todo/").unwrap();
        assert_eq!(bare, slashed);
    }

    #[test]
    fn new_rejects_empty_input() {
        assert_eq!(Authority::new("   ").unwrap_err(), AddressError::EmptyAuthority);
        assert_eq!(Authority::new("///").unwrap_err(), AddressError::EmptyAuthority);
    }

    #[test]
    fn new_rejects_malformed_prefixes() {
        for bad in [
            "org.example.todo",
            "Content://upper.scheme",
            "content://",
            "content://host name",
            "content://x.y//todo",
        ] {
            let err = Authority::new(bad).unwrap_err();
            assert!(
                matches!(err, AddressError::InvalidAuthority(_)),
                "`{bad}` should be rejected as invalid, got {err}"
            );
        }
    }

    #[test]
    fn serde_roundtrip_revalidates() {
        let authority = Authority::new("content://x.y/todo").unwrap();
        let json = serde_json::to_value(&authority).unwrap();
        assert_eq!(json, "content://x.y/todo");

        let decoded: Authority = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, authority);

        let err = serde_json::from_value::<Authority>(serde_json::json!("not a prefix"));
        assert!(err.is_err());
    }
}
