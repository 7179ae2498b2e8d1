//! Direction-aware neighbor lookups over an [`AdjacencyStore`].
//!
//! `spec.md` §4.4. `children`/`ancestors` defer to the store's forward/reverse
//! views, deduplicated the same way the undirected union is — a duplicate
//! edge in the adjacency artifact must not surface as a duplicate neighbor.
//! The undirected view is the set union of both directions per node;
//! depending on `optimize_memory` it is either recomputed on every call
//! (`optimize_memory = true`, the `Config` default — trades memory for CPU)
//! or materialized once into its own CSR and cached for subsequent calls
//! (`optimize_memory = false` — trades CPU for memory).

use std::sync::OnceLock;

use crate::adjacency::AdjacencyStore;

/// Which edge interpretation a search should walk.
///
/// `spec.md` §5.1: every query chooses once, up front, whether the graph is
/// read as directed (children going one way, ancestors the other) or
/// undirected (both directions collapsed into one neighbor set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Directed,
    Undirected,
}

/// Answers children/ancestors/undirected-neighbor queries against an
/// [`AdjacencyStore`], with a memory/CPU trade-off for the undirected view.
pub struct NeighborOracle<'a> {
    store: &'a AdjacencyStore,
    optimize_memory: bool,
    undirected: OnceLock<(Vec<u64>, Vec<u32>)>,
}

impl<'a> NeighborOracle<'a> {
    /// `optimize_memory = false` materializes and caches the undirected CSR
    /// on first use; `true` recomputes it per call instead, trading CPU for
    /// the memory that materialized view would otherwise hold.
    pub fn new(store: &'a AdjacencyStore, optimize_memory: bool) -> Self {
        Self {
            store,
            optimize_memory,
            undirected: OnceLock::new(),
        }
    }

    /// Direct successors of `node` in the directed graph, deduplicated.
    pub fn children(&self, node: u32) -> Vec<u32> {
        dedup_sorted(self.store.successors(node).to_vec())
    }

    /// Direct predecessors of `node` in the directed graph, deduplicated.
    pub fn ancestors(&self, node: u32) -> Vec<u32> {
        dedup_sorted(self.store.predecessors(node).to_vec())
    }

    /// Union of children and ancestors of `node`, deduplicated, as seen when
    /// the graph is interpreted as undirected.
    pub fn neighbors_undirected(&self, node: u32) -> Vec<u32> {
        if self.optimize_memory {
            return self.union_on_the_fly(node);
        }
        let (indptr, indices) = self.undirected.get_or_init(|| self.materialize_undirected());
        let start = indptr[node as usize] as usize;
        let end = indptr[node as usize + 1] as usize;
        indices[start..end].to_vec()
    }

    fn union_on_the_fly(&self, node: u32) -> Vec<u32> {
        let combined: Vec<u32> = self
            .store
            .successors(node)
            .iter()
            .chain(self.store.predecessors(node))
            .copied()
            .collect();
        dedup_sorted(combined)
    }

    /// Neighbors to expand to when walking *forward* (away from the search
    /// source) under the given [`Direction`].
    pub fn forward(&self, node: u32, direction: Direction) -> Vec<u32> {
        match direction {
            Direction::Directed => self.children(node),
            Direction::Undirected => self.neighbors_undirected(node),
        }
    }

    /// Neighbors to expand to when walking *backward* (away from the search
    /// target) under the given [`Direction`].
    pub fn backward(&self, node: u32, direction: Direction) -> Vec<u32> {
        match direction {
            Direction::Directed => self.ancestors(node),
            Direction::Undirected => self.neighbors_undirected(node),
        }
    }

    fn materialize_undirected(&self) -> (Vec<u64>, Vec<u32>) {
        let n = self.store.n();
        let mut indptr = Vec::with_capacity(n + 1);
        indptr.push(0u64);
        let mut indices = Vec::new();
        for node in 0..n as u32 {
            indices.extend(self.union_on_the_fly(node));
            indptr.push(indices.len() as u64);
        }
        (indptr, indices)
    }
}

fn dedup_sorted(mut ids: Vec<u32>) -> Vec<u32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
