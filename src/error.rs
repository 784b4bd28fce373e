//! The error type for fallible tree operations.

/// Errors returned by [`OrderedTree`][crate::OrderedTree] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No stored item equals the one asked for.
    #[error("item not in tree")]
    ItemNotFound,
}
