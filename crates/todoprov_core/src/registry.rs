//! Authority-keyed contract registry and URI dispatch.
//!
//! # Responsibility
//! - Hold the contracts a host process serves, keyed by authority.
//! - Route an incoming URI to the contract that owns it.
//!
//! # Invariants
//! - At most one contract per authority.
//! - Dispatch never guesses: a URI no registered authority owns is an
//!   error, not a fallback.

use crate::uri::{AddressError, TodoContract, TodoResource};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Contract registration and dispatch errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateAuthority(String),
    NoMatchingAuthority(String),
    Address(AddressError),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateAuthority(authority) => {
                write!(f, "authority already registered: {authority}")
            }
            Self::NoMatchingAuthority(uri) => {
                write!(f, "no registered authority owns uri: {uri}")
            }
            Self::Address(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Address(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AddressError> for RegistryError {
    fn from(value: AddressError) -> Self {
        Self::Address(value)
    }
}

/// Runtime registry of the contracts one host process serves.
#[derive(Debug, Default)]
pub struct ContractRegistry {
    contracts: BTreeMap<String, TodoContract>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one contract under its authority.
    pub fn register(&mut self, contract: TodoContract) -> RegistryResult<()> {
        let authority = contract.authority().as_str().to_string();
        if self.contracts.contains_key(authority.as_str()) {
            warn!("event=contract_register module=registry status=duplicate authority={authority}");
            return Err(RegistryError::DuplicateAuthority(authority));
        }

        info!("event=contract_register module=registry status=ok authority={authority}");
        self.contracts.insert(authority, contract);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Returns sorted registered authority strings.
    pub fn authorities(&self) -> Vec<&str> {
        self.contracts.keys().map(String::as_str).collect()
    }

    /// Returns the contract registered for one authority, if any.
    ///
    /// The lookup applies the same normalization as `Authority::new`.
    pub fn contract_for(&self, authority: &str) -> Option<&TodoContract> {
        self.contracts
            .get(authority.trim().trim_end_matches('/'))
    }

    /// Routes one URI to the contract owning its authority.
    ///
    /// When registered authorities nest (one is a path prefix of another),
    /// the longest matching authority owns the URI.
    ///
    /// # Errors
    /// - `RegistryError::NoMatchingAuthority` when no registered contract
    ///   owns the URI.
    /// - `RegistryError::Address` when the owning contract rejects the
    ///   path (bad id, unknown shape).
    pub fn resolve(&self, uri: &str) -> RegistryResult<(&TodoContract, TodoResource)> {
        let trimmed = uri.trim().trim_end_matches('/');
        let owner = self
            .contracts
            .values()
            .filter(|contract| owns_uri(contract, trimmed))
            .max_by_key(|contract| contract.authority().as_str().len());

        let Some(contract) = owner else {
            warn!("event=uri_resolve module=registry status=unmatched uri={trimmed}");
            return Err(RegistryError::NoMatchingAuthority(trimmed.to_string()));
        };

        match contract.resolve(uri) {
            Ok(resource) => Ok((contract, resource)),
            Err(err) => {
                warn!(
                    "event=uri_resolve module=registry status=rejected authority={} error={err}",
                    contract.authority()
                );
                Err(RegistryError::Address(err))
            }
        }
    }
}

fn owns_uri(contract: &TodoContract, trimmed_uri: &str) -> bool {
    let authority = contract.authority().as_str();
    trimmed_uri == authority
        || trimmed_uri
            .strip_prefix(authority)
            .is_some_and(|rest| rest.starts_with('/'))
}
