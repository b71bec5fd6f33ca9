//! # Disjoint sets over integer elements
//!
//! This crate provides a union-find: a fixed universe of elements `0..n` partitioned into
//! disjoint components, with near-constant-time merging of components and membership queries.
//! The capabilities are described by the [DisjointSet] trait and implemented by [UnionFind],
//! which uses union by size and path compression.
//!
//! Elements are plain indices. Mapping domain objects to the range `0..n` is up to the caller.
//! Every element ID is checked, and IDs outside of the universe are reported as
//! [`Error::OutOfRange`] rather than panicking.
//!
//! # Example
//!
//! Let's detect a cycle in an undirected graph. An edge closes a cycle exactly when its
//! endpoints are already connected, which is what [`DisjointSet::unify`] reports by returning
//! `false`.
//!
//! ```
//! use disjoint_set::{DisjointSet, UnionFind};
//!
//! let edges = [(0, 1), (1, 2), (3, 4), (2, 0)];
//!
//! let mut uf = UnionFind::new(5)?;
//! let mut closing = vec![];
//! for (a, b) in edges {
//!     if !uf.unify(a, b)? {
//!         closing.push((a, b));
//!     }
//! }
//!
//! assert_eq!(closing, vec![(2, 0)]);
//! assert_eq!(uf.components(), 2);
//! assert_eq!(uf.groups(), vec![vec![0, 1, 2], vec![3, 4]]);
//! # Ok::<(), disjoint_set::Error>(())
//! ```
//!
//! An empty universe cannot be constructed:
//!
//! ```
//! # use disjoint_set::{Error, UnionFind};
//! assert_eq!(UnionFind::new(0).unwrap_err(), Error::EmptyUniverse);
//! ```

pub mod disjoint_set;
pub mod error;
pub mod union_find;

pub use disjoint_set::DisjointSet;
pub use error::{Error, Result};
pub use union_find::UnionFind;
