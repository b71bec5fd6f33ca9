use thiserror::Error;

/// Errors reported by [`UnionFind`](crate::UnionFind).
///
/// Both variants describe invalid input from the caller. Nothing is retried or clamped, and a
/// failing operation leaves the structure untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A universe must contain at least one element.
    #[error("universe size must be positive")]
    EmptyUniverse,
    /// An element ID outside of `0..size`.
    #[error("element {element} is out of range for a universe of size {size}")]
    OutOfRange { element: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
