//! Table-shape declarations for the two provider tables.
//!
//! # Responsibility
//! - Define the column-name vocabulary the storage backend queries against.
//! - Keep one canonical identifier type for list and item row keys.
//!
//! # Invariants
//! - Column names are stable wire constants and never change spelling.
//! - Identifiers are plain 64-bit row keys; ownership of an item by a list
//!   is carried by the URI path, not by the identifier itself.

pub mod columns;

/// Row key of a to-do list, unique within the `lists` collection.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ListId = i64;

/// Row key of a to-do item, unique within its owning list's `items`
/// collection.
pub type ItemId = i64;
