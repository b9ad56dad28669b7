use thiserror::Error;

/// Errors reported when a caller breaks the contract of an operation.
///
/// Looking up or removing a key that isn't in the tree is not an error; those return `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// [`Iter::try_next`][crate::Iter::try_next] was called after every node had been visited.
    /// Check [`Iter::has_next`][crate::Iter::has_next] first.
    #[error("iterator is exhausted: no nodes left to visit")]
    Exhausted,
}
