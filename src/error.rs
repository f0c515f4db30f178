use thiserror::Error;

/// Errors returned by [`AvlMap`](crate::AvlMap) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("key not found")]
    KeyNotFound,
}

/// A broken structural invariant, as reported by
/// [`AvlTree::check_invariants`](crate::AvlTree::check_invariants).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root node has a parent")]
    RootHasParent,
    #[error("child's parent link does not point at its parent")]
    ParentMismatch,
    #[error("keys are out of order")]
    OutOfOrder,
    #[error("stored height {stored} differs from computed height {computed}")]
    HeightMismatch { stored: u8, computed: u8 },
    #[error("balance factor {balance} is outside -1..=1")]
    Unbalanced { balance: i8 },
    #[error("tree length {len} differs from node count {counted}")]
    LengthMismatch { len: usize, counted: usize },
}
