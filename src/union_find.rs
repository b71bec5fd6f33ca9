//! # Union-find over integer elements
//!
//! See the [`UnionFind`] type.


use std::cell::Cell;
use std::fmt;
use std::num::NonZeroUsize;

use tracing::{debug, trace};

use crate::disjoint_set::DisjointSet;
use crate::error::{Error, Result};

/// A disjoint-set forest over the elements `0..size()`, using union by size and path
/// compression.
///
/// Elements are plain indices into two vectors: the parent of every element and, for roots, the
/// number of elements in their tree. Queries go through [`UnionFind::find`], which re-points
/// every node on the visited path directly at the root. The parent pointers live in [`Cell`]s so
/// that this also works for queries taking `&self`. As a consequence, the type is not `Sync`.
///
/// When two trees of the same size are merged, the root of the first argument to
/// [`DisjointSet::unify`] stays the root.
///
/// # Examples
///
/// ```
/// use disjoint_set::{DisjointSet, UnionFind};
///
/// let mut uf = UnionFind::new(5).unwrap();
/// assert!(uf.unify(0, 1).unwrap());
/// assert!(uf.unify(1, 2).unwrap());
/// // Already connected, nothing happens
/// assert!(!uf.unify(2, 0).unwrap());
///
/// assert!(uf.connected(0, 2).unwrap());
/// assert!(!uf.connected(0, 3).unwrap());
/// assert_eq!(uf.component_size(0).unwrap(), 3);
/// assert_eq!(uf.components(), 3);
/// assert_eq!(uf.to_string(), "{{0, 1, 2}, {3}, {4}}");
///
/// // Element IDs are checked
/// assert!(uf.find(5).is_err());
/// ```
#[derive(Clone)]
pub struct UnionFind {
    /// Parent pointer of every element. Roots point at themselves.
    parent: Vec<Cell<usize>>,
    /// Number of elements in the tree rooted at an element. Only meaningful for roots.
    size: Vec<usize>,
    /// Number of roots.
    components: usize,
}

impl UnionFind {
    /// Create `size` singleton components, or fail with [`Error::EmptyUniverse`] if `size` is
    /// zero.
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(Self::with_size)
            .ok_or(Error::EmptyUniverse)
    }

    /// Create `size` singleton components.
    pub fn with_size(size: NonZeroUsize) -> Self {
        let size = size.get();
        debug!(size, "new union-find");
        UnionFind {
            parent: (0..size).map(Cell::new).collect(),
            size: vec![1; size],
            components: size,
        }
    }

    /// Return the root of the component containing `p`.
    ///
    /// The root returned for a component only changes when that component is merged with
    /// another one.
    pub fn find(&self, p: usize) -> Result<usize> {
        self.check(p)?;
        Ok(self.find_root(p))
    }

    /// Whether `p` is the root of its component. Unlike [`UnionFind::find`], this doesn't touch
    /// any parent pointers.
    pub fn is_root(&self, p: usize) -> Result<bool> {
        self.check(p)?;
        Ok(self.parent[p].get() == p)
    }

    /// Iterate over the roots of all components in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|(element, parent)| parent.get() == *element)
            .map(|(element, _)| element)
    }

    /// Collect the members of every component.
    ///
    /// Each group is sorted, and the groups are ordered by their smallest member.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut by_root = vec![Vec::new(); self.parent.len()];
        for element in 0..self.parent.len() {
            by_root[self.find_root(element)].push(element);
        }
        let mut groups: Vec<Vec<usize>> = by_root
            .into_iter()
            .filter(|group| !group.is_empty())
            .collect();
        groups.sort_unstable_by_key(|group| group[0]);
        groups
    }

    fn check(&self, element: usize) -> Result<()> {
        if element < self.parent.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                element,
                size: self.parent.len(),
            })
        }
    }

    /// Callers must have validated `p` with [`UnionFind::check`].
    fn find_root(&self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root].get() != root {
            root = self.parent[root].get();
        }

        let mut cur = p;
        while cur != root {
            cur = self.parent[cur].replace(root);
        }
        root
    }
}

impl DisjointSet for UnionFind {
    fn unify(&mut self, p: usize, q: usize) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;

        let p_root = self.find_root(p);
        let q_root = self.find_root(q);
        if p_root == q_root {
            return Ok(false);
        }

        let (designated_parent, designated_child) = if self.size[p_root] < self.size[q_root] {
            (q_root, p_root)
        } else {
            (p_root, q_root)
        };

        self.parent[designated_child].set(designated_parent);
        self.size[designated_parent] += self.size[designated_child];
        self.components -= 1;

        trace!(
            root = designated_parent,
            absorbed = designated_child,
            size = self.size[designated_parent],
            components = self.components,
            "merged components"
        );
        Ok(true)
    }

    fn connected(&self, p: usize, q: usize) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.find_root(p) == self.find_root(q))
    }

    fn component_size(&self, p: usize) -> Result<usize> {
        self.check(p)?;
        Ok(self.size[self.find_root(p)])
    }

    fn size(&self) -> usize {
        self.parent.len()
    }

    fn components(&self) -> usize {
        self.components
    }
}

impl TryFrom<usize> for UnionFind {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

struct AsSet<'a>(&'a [usize]);

impl fmt::Debug for AsSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0).finish()
    }
}

/// Formats as a map from each root to the members of its component.
impl fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.groups();
        f.debug_map()
            .entries(
                groups
                    .iter()
                    .map(|group| (self.find_root(group[0]), AsSet(group))),
            )
            .finish()
    }
}

/// Formats as the set of all components.
impl fmt::Display for UnionFind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = self.groups();
        f.debug_set()
            .entries(groups.iter().map(|group| AsSet(group)))
            .finish()
    }
}
