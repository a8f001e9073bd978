//! Resource addressing for the two-level lists/items hierarchy.
//!
//! # Responsibility
//! - Build canonical content URIs for the four addressable resource shapes.
//! - Resolve incoming URIs back into typed resource descriptions.
//! - Produce the wildcard patterns routers match request URIs against.
//!
//! # Invariants
//! - Every builder output resolves back to the resource that produced it.
//! - An item URI is only meaningful under its list: the `lists/{id}` path
//!   always precedes `items`.
//! - All operations are pure string transformations; there is no state.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod authority;
mod builder;
mod pattern;
mod resolve;

pub use authority::Authority;
pub use builder::{ContentUri, TodoContract};
pub use pattern::{PatternSegment, UriPattern, WildcardStyle};
pub use resolve::TodoResource;

/// Path segment naming the collection of to-do lists.
pub const LISTS_SEGMENT: &str = "lists";
/// Path segment naming the item collection nested under one list.
pub const ITEMS_SEGMENT: &str = "items";

pub type AddressResult<T> = Result<T, AddressError>;

/// Addressing errors for authority validation and URI resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    EmptyAuthority,
    InvalidAuthority(String),
    ForeignAuthority { expected: String, uri: String },
    InvalidId { segment: String },
    UnrecognizedPath(String),
}

impl Display for AddressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAuthority => write!(f, "authority cannot be empty"),
            Self::InvalidAuthority(value) => {
                write!(f, "authority is not a valid content prefix: `{value}`")
            }
            Self::ForeignAuthority { expected, uri } => {
                write!(f, "uri `{uri}` does not belong to authority `{expected}`")
            }
            Self::InvalidId { segment } => {
                write!(f, "path segment `{segment}` is not a valid row id")
            }
            Self::UnrecognizedPath(uri) => {
                write!(f, "uri `{uri}` does not address a known resource shape")
            }
        }
    }
}

impl Error for AddressError {}
