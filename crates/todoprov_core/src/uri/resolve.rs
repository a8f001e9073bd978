//! Resolution of incoming URIs into typed resource descriptions.
//!
//! # Responsibility
//! - Invert the contract builders: map a concrete URI string onto one of
//!   the four addressable resource shapes.
//! - Reject foreign or malformed URIs with a message-carrying error
//!   instead of masking them.

use crate::model::{ItemId, ListId};
use crate::uri::{AddressError, AddressResult, TodoContract, ITEMS_SEGMENT, LISTS_SEGMENT};
use serde::{Deserialize, Serialize};

/// One addressable resource of the to-do provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "resource", rename_all = "snake_case")]
pub enum TodoResource {
    /// The collection of all lists.
    Lists,
    /// One list row.
    List { list_id: ListId },
    /// The item collection of one list.
    Items { list_id: ListId },
    /// One item row under its list.
    Item { list_id: ListId, item_id: ItemId },
}

impl TodoResource {
    /// Returns the list id carried by the URI path, when present.
    pub fn list_id(&self) -> Option<ListId> {
        match self {
            Self::Lists => None,
            Self::List { list_id } | Self::Items { list_id } | Self::Item { list_id, .. } => {
                Some(*list_id)
            }
        }
    }

    /// Returns the item id, when this resource addresses a single item.
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            Self::Item { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    /// Returns whether this resource addresses a collection rather than a
    /// single row.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Lists | Self::Items { .. })
    }
}

impl TodoContract {
    /// Resolves one URI against this contract.
    ///
    /// Surrounding whitespace and trailing `/` characters are ignored,
    /// mirroring authority normalization.
    ///
    /// # Errors
    /// - `AddressError::ForeignAuthority` when `uri` does not start with
    ///   this contract's authority at a segment boundary.
    /// - `AddressError::InvalidId` when an id segment is not a 64-bit
    ///   integer.
    /// - `AddressError::UnrecognizedPath` when the path is empty or not one
    ///   of the four addressable shapes.
    pub fn resolve(&self, uri: &str) -> AddressResult<TodoResource> {
        let trimmed = uri.trim().trim_end_matches('/');
        let path = match trimmed.strip_prefix(self.authority().as_str()) {
            Some("") => return Err(AddressError::UnrecognizedPath(trimmed.to_string())),
            Some(rest) => match rest.strip_prefix('/') {
                Some(path) => path,
                None => return Err(self.foreign_authority(trimmed)),
            },
            None => return Err(self.foreign_authority(trimmed)),
        };

        let segments: Vec<&str> = path.split('/').collect();
        match segments.as_slice() {
            [LISTS_SEGMENT] => Ok(TodoResource::Lists),
            [LISTS_SEGMENT, list_id] => Ok(TodoResource::List {
                list_id: parse_id(list_id)?,
            }),
            [LISTS_SEGMENT, list_id, ITEMS_SEGMENT] => Ok(TodoResource::Items {
                list_id: parse_id(list_id)?,
            }),
            [LISTS_SEGMENT, list_id, ITEMS_SEGMENT, item_id] => Ok(TodoResource::Item {
                list_id: parse_id(list_id)?,
                item_id: parse_id(item_id)?,
            }),
            _ => Err(AddressError::UnrecognizedPath(trimmed.to_string())),
        }
    }

    fn foreign_authority(&self, uri: &str) -> AddressError {
        AddressError::ForeignAuthority {
            expected: self.authority().as_str().to_string(),
            uri: uri.to_string(),
        }
    }
}

fn parse_id(segment: &str) -> AddressResult<i64> {
    segment.parse::<i64>().map_err(|_| AddressError::InvalidId {
        segment: segment.to_string(),
    })
}
