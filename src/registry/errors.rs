//! Error types for registry construction

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No domains were supplied
    #[error("Domain registry cannot be empty")]
    Empty,

    /// An entry was empty or whitespace-only
    #[error("Domain at position {index} is empty")]
    EmptyDomain { index: usize },
}
