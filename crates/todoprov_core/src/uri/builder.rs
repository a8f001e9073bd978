//! Content URI construction for lists and nested items.
//!
//! # Responsibility
//! - Provide the canonical builders for the four addressable URI shapes.
//! - Keep URI assembly as an ordered-segment value type instead of raw
//!   string concatenation.
//!
//! # Invariants
//! - `list_items_uri(l)` equals `list_uri(l)` with `items` appended.
//! - `list_item_uri(l, i)` equals `list_items_uri(l)` with `{i}` appended.
//! - Builders are pure: identical inputs render byte-identical strings.

use crate::model::columns::{item_columns, list_columns, ItemSchemaVariant};
use crate::model::{ItemId, ListId};
use crate::uri::{Authority, PatternSegment, UriPattern, ITEMS_SEGMENT, LISTS_SEGMENT};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One content URI as an authority plus ordered path segments.
///
/// Ecosystem-neutral stand-in for a platform URI type; adapters at the
/// system boundary convert the rendered string into whatever the host
/// platform expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUri {
    authority: Authority,
    segments: Vec<String>,
}

impl ContentUri {
    /// Creates a URI addressing the authority root, with no path segments.
    pub fn new(authority: Authority) -> Self {
        Self {
            authority,
            segments: Vec::new(),
        }
    }

    /// Returns this URI with one more path segment appended.
    pub fn pushed(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Returns the owning authority.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Returns the ordered path segments below the authority.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Display for ContentUri {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.authority)?;
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

/// Declarative contract for one to-do provider authority.
///
/// Holds everything a caller needs to address the provider: the authority
/// prefix and the item-table schema variant. All addressing operations are
/// pure functions over this immutable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoContract {
    authority: Authority,
    #[serde(default)]
    item_schema: ItemSchemaVariant,
}

impl TodoContract {
    /// Creates a contract with the default (implicit list id) item schema.
    pub fn new(authority: Authority) -> Self {
        Self::with_item_schema(authority, ItemSchemaVariant::default())
    }

    /// Creates a contract with an explicit item-table schema variant.
    pub fn with_item_schema(authority: Authority, item_schema: ItemSchemaVariant) -> Self {
        Self {
            authority,
            item_schema,
        }
    }

    /// Returns the authority this contract addresses.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Returns the configured item-table schema variant.
    pub fn item_schema(&self) -> ItemSchemaVariant {
        self.item_schema
    }

    /// Returns the column set of the `lists` table.
    pub fn list_columns(&self) -> &'static [&'static str] {
        list_columns()
    }

    /// Returns the column set of the `items` table for this contract's
    /// schema variant.
    pub fn item_columns(&self) -> &'static [&'static str] {
        item_columns(self.item_schema)
    }

    /// Addresses the collection of all lists: `{authority}/lists`.
    pub fn lists_uri(&self) -> ContentUri {
        ContentUri::new(self.authority.clone()).pushed(LISTS_SEGMENT)
    }

    /// Addresses one list row: `{authority}/lists/{listId}`.
    pub fn list_uri(&self, list_id: ListId) -> ContentUri {
        self.lists_uri().pushed(list_id.to_string())
    }

    /// Addresses the item collection of one list:
    /// `{authority}/lists/{listId}/items`.
    pub fn list_items_uri(&self, list_id: ListId) -> ContentUri {
        self.list_uri(list_id).pushed(ITEMS_SEGMENT)
    }

    /// Addresses one item row under its list:
    /// `{authority}/lists/{listId}/items/{itemId}`.
    pub fn list_item_uri(&self, list_id: ListId, item_id: ItemId) -> ContentUri {
        self.list_items_uri(list_id).pushed(item_id.to_string())
    }

    /// Pattern matching every per-list item collection URI:
    /// `{authority}/lists/<wild>/items`.
    pub fn list_items_pattern(&self) -> UriPattern {
        UriPattern::new(
            self.authority.clone(),
            vec![
                PatternSegment::Literal(LISTS_SEGMENT.to_string()),
                PatternSegment::AnyId,
                PatternSegment::Literal(ITEMS_SEGMENT.to_string()),
            ],
        )
    }

    /// Pattern matching every single-item URI:
    /// `{authority}/lists/<wild>/items/<wild>`.
    pub fn list_item_pattern(&self) -> UriPattern {
        UriPattern::new(
            self.authority.clone(),
            vec![
                PatternSegment::Literal(LISTS_SEGMENT.to_string()),
                PatternSegment::AnyId,
                PatternSegment::Literal(ITEMS_SEGMENT.to_string()),
                PatternSegment::AnyId,
            ],
        )
    }
}
