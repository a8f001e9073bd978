//! MIME content-type derivation for provider responses.
//!
//! # Responsibility
//! - Derive cursor content-type strings from a resource-kind name.
//! - Associate each addressable resource with its content type.
//!
//! # Invariants
//! - Collection resources use the `dir` prefix, single rows the `item`
//!   prefix; distinct kinds never produce equal outputs under one prefix.
//! - Kind strings are accepted verbatim; validation is the caller's job.

use crate::uri::TodoResource;

/// Resource-kind name of a to-do list.
pub const TODO_LIST_KIND: &str = "vnd.org.positronicnet.todolist";
/// Resource-kind name of a to-do item.
pub const TODO_ITEM_KIND: &str = "vnd.org.positronicnet.todoitem";

/// Content type of a multi-row (collection) response for `kind`.
pub fn dir_content_type(kind: &str) -> String {
    format!("vnd.android.cursor.dir/{kind}")
}

/// Content type of a single-row response for `kind`.
pub fn row_content_type(kind: &str) -> String {
    format!("vnd.android.cursor.item/{kind}")
}

impl TodoResource {
    /// Returns the resource-kind name addressed by this resource.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Lists | Self::List { .. } => TODO_LIST_KIND,
            Self::Items { .. } | Self::Item { .. } => TODO_ITEM_KIND,
        }
    }

    /// Returns the content type a provider reports for this resource.
    pub fn content_type(&self) -> String {
        if self.is_collection() {
            dir_content_type(self.kind())
        } else {
            row_content_type(self.kind())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{dir_content_type, row_content_type, TODO_ITEM_KIND, TODO_LIST_KIND};
    use crate::uri::TodoResource;

    #[test]
    fn dir_content_type_uses_platform_prefix() {
        assert_eq!(
            dir_content_type(TODO_LIST_KIND),
            "vnd.android.cursor.dir/vnd.org.positronicnet.todolist"
        );
    }

    #[test]
    fn row_content_type_uses_platform_prefix() {
        assert_eq!(
            row_content_type(TODO_ITEM_KIND),
            "vnd.android.cursor.item/vnd.org.positronicnet.todoitem"
        );
    }

    #[test]
    fn distinct_kinds_stay_distinct() {
        assert_ne!(dir_content_type("a"), dir_content_type("b"));
        assert_ne!(row_content_type("a"), row_content_type("b"));
        assert_ne!(dir_content_type("a"), row_content_type("a"));
    }

    #[test]
    fn unexpected_kinds_pass_through_verbatim() {
        assert_eq!(dir_content_type(""), "vnd.android.cursor.dir/");
        assert_eq!(
            row_content_type("custom/kind"),
            "vnd.android.cursor.item/custom/kind"
        );
    }

    #[test]
    fn resources_map_to_dir_or_row_types() {
        assert_eq!(
            TodoResource::Lists.content_type(),
            dir_content_type(TODO_LIST_KIND)
        );
        assert_eq!(
            TodoResource::List { list_id: 5 }.content_type(),
            row_content_type(TODO_LIST_KIND)
        );
        assert_eq!(
            TodoResource::Items { list_id: 5 }.content_type(),
            dir_content_type(TODO_ITEM_KIND)
        );
        assert_eq!(
            TodoResource::Item {
                list_id: 5,
                item_id: 12
            }
            .content_type(),
            row_content_type(TODO_ITEM_KIND)
        );
    }
}
