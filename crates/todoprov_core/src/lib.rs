//! Contract declarations for a two-table to-do content provider.
//! This crate is the single source of truth for the provider's addressing
//! surface; storage and query dispatch live with the provider host.

pub mod logging;
pub mod mime;
pub mod model;
pub mod registry;
pub mod uri;

pub use logging::{default_log_level, init_logging, logging_status};
pub use mime::{dir_content_type, row_content_type, TODO_ITEM_KIND, TODO_LIST_KIND};
pub use model::columns::{item_columns, list_columns, ItemSchemaVariant};
pub use model::{ItemId, ListId};
pub use registry::{ContractRegistry, RegistryError, RegistryResult};
pub use uri::{
    AddressError, AddressResult, Authority, ContentUri, TodoContract, TodoResource, UriPattern,
    WildcardStyle,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
