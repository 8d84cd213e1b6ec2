/// The ways an operation on one of this crate's collections can fail.
///
/// Each condition is its own variant so callers can tell "the structure was empty" apart from
/// "that element isn't here".
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Deletion was attempted on a tree with no root.
    #[error("cannot delete from an empty tree")]
    EmptyTree,
    /// The item to delete is not in the tree.
    #[error("item not found in tree")]
    NotFound,
    /// A map lookup or deletion named a key the map doesn't contain.
    #[error("key not found")]
    KeyNotFound,
    /// The priority queue has no front item.
    #[error("priority queue is empty and has no front item")]
    EmptyQueue,
}

/// Shorthand for results whose error is this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
