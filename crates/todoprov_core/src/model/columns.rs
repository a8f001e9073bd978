//! Column-name constants for the `lists` and `items` tables.
//!
//! # Responsibility
//! - Name every column the storage backend exposes through the provider.
//! - Select between the two observed item-table shapes.
//!
//! # Invariants
//! - `_id` is the primary-key column name on both tables.
//! - The `todo_list_id` column exists only under
//!   `ItemSchemaVariant::ExplicitListId`; the implicit variant carries
//!   list ownership in the URI path instead.

use serde::{Deserialize, Serialize};

/// Primary-key column of the `lists` table.
pub const LIST_COL_ID: &str = "_id";
/// Display name column of the `lists` table.
pub const LIST_COL_NAME: &str = "name";

/// Primary-key column of the `items` table.
pub const ITEM_COL_ID: &str = "_id";
/// Foreign-key column pointing at the owning list row.
pub const ITEM_COL_TODO_LIST_ID: &str = "todo_list_id";
/// Free-form item text column.
pub const ITEM_COL_DESCRIPTION: &str = "description";
/// Completion flag column (stored as 0/1).
pub const ITEM_COL_IS_DONE: &str = "is_done";

const LIST_COLUMNS: &[&str] = &[LIST_COL_ID, LIST_COL_NAME];

const ITEM_COLUMNS_IMPLICIT: &[&str] = &[ITEM_COL_ID, ITEM_COL_DESCRIPTION, ITEM_COL_IS_DONE];

const ITEM_COLUMNS_EXPLICIT: &[&str] = &[
    ITEM_COL_ID,
    ITEM_COL_TODO_LIST_ID,
    ITEM_COL_DESCRIPTION,
    ITEM_COL_IS_DONE,
];

/// How an item row names its owning list.
///
/// Both shapes exist in deployed providers, so the choice is configuration
/// on the contract rather than a fixed constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSchemaVariant {
    /// The owning list id is implicit in the item URI path; the provider
    /// fills it in from the URI on insert/update.
    #[default]
    ImplicitListId,
    /// The item table carries an explicit `todo_list_id` foreign-key column.
    ExplicitListId,
}

/// Returns the column set of the `lists` table.
pub fn list_columns() -> &'static [&'static str] {
    LIST_COLUMNS
}

/// Returns the column set of the `items` table for one schema variant.
pub fn item_columns(variant: ItemSchemaVariant) -> &'static [&'static str] {
    match variant {
        ItemSchemaVariant::ImplicitListId => ITEM_COLUMNS_IMPLICIT,
        ItemSchemaVariant::ExplicitListId => ITEM_COLUMNS_EXPLICIT,
    }
}
