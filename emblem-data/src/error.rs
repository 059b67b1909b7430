//! Errors reported by list link operations.

use thiserror::Error;

/// Why a node could not be linked into or detached from a list.
///
/// A rejected operation leaves both the list and the storage untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The key was the null sentinel.
    #[error("node key is null")]
    Null,
    /// The storage holds no node under the key.
    #[error("no node is stored under the key")]
    Vacant,
}
