//! # The disjoint-set capability
//!
//! [`DisjointSet`] describes what a union-find offers its callers without tying them to a
//! particular backing representation. [`UnionFind`](crate::UnionFind) is the implementation
//! provided by this crate.

use crate::error::Result;

/// A partition of the elements `0..size()` into disjoint components.
///
/// Queries take `&self`. Implementations are free to restructure their internals while
/// answering them (e.g. path compression), as long as component membership never changes.
pub trait DisjointSet {
    /// Merge the components containing `p` and `q`.
    ///
    /// Returns `Ok(true)` if two distinct components were merged and `Ok(false)` if `p` and `q`
    /// were already connected.
    fn unify(&mut self, p: usize, q: usize) -> Result<bool>;

    /// Whether `p` and `q` belong to the same component.
    fn connected(&self, p: usize, q: usize) -> Result<bool>;

    /// Number of elements in the component containing `p`.
    fn component_size(&self, p: usize) -> Result<usize>;

    /// Number of elements in the universe.
    fn size(&self) -> usize;

    /// Number of components currently present.
    fn components(&self) -> usize;
}
