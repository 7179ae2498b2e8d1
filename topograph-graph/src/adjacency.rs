//! Forward (CSR) and reverse (CSC) adjacency storage.
//!
//! `spec.md` §4.3. The forward direction is loaded eagerly; the reverse
//! direction is the transpose of the forward one and is built lazily on
//! first use, then cached for the lifetime of the store — mirroring the
//! teacher's "compute once, reuse forever" treatment of derived views.

use std::path::Path;
use std::sync::OnceLock;

use topograph_common::Result;

/// Forward and (lazily-derived) reverse adjacency of a directed graph over
/// dense node ids `[0, n)`.
#[derive(Debug)]
pub struct AdjacencyStore {
    n: usize,
    fwd_indptr: Vec<u64>,
    fwd_indices: Vec<u32>,
    rev: OnceLock<(Vec<u64>, Vec<u32>)>,
}

impl AdjacencyStore {
    /// Builds a store directly from a persisted CSR artifact's fields.
    fn from_csr(csr: topograph_io::CsrAdjacency) -> Self {
        Self {
            n: csr.n_nodes as usize,
            fwd_indptr: csr.indptr,
            fwd_indices: csr.indices,
            rev: OnceLock::new(),
        }
    }

    /// Loads the forward adjacency from a persisted `.tgcsr` artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let csr = topograph_io::CsrAdjacency::read(path).map_err(topograph_io::adjacency_error)?;
        Ok(Self::from_csr(csr))
    }

    /// Builds a store in memory from per-node successor lists, as used by
    /// the testing-only graph construction hook.
    pub fn from_edges(adjacency: Vec<Vec<u32>>) -> Self {
        let n = adjacency.len();
        let mut fwd_indptr = Vec::with_capacity(n + 1);
        fwd_indptr.push(0u64);
        let mut fwd_indices = Vec::new();
        for nbrs in &adjacency {
            fwd_indices.extend_from_slice(nbrs);
            fwd_indptr.push(fwd_indices.len() as u64);
        }
        Self {
            n,
            fwd_indptr,
            fwd_indices,
            rev: OnceLock::new(),
        }
    }

    /// Number of nodes `n`.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Forward neighbors (children) of `node`.
    pub fn successors(&self, node: u32) -> &[u32] {
        slice_for(&self.fwd_indptr, &self.fwd_indices, node)
    }

    /// Reverse neighbors (parents) of `node`. Builds the CSC transpose on
    /// first call; subsequent calls reuse the cached result.
    pub fn predecessors(&self, node: u32) -> &[u32] {
        let (rev_indptr, rev_indices) = self.rev.get_or_init(|| self.build_transpose());
        slice_for(rev_indptr, rev_indices, node)
    }

    fn build_transpose(&self) -> (Vec<u64>, Vec<u32>) {
        let mut counts = vec![0u64; self.n + 1];
        for &dst in &self.fwd_indices {
            counts[dst as usize + 1] += 1;
        }
        for i in 1..counts.len() {
            counts[i] += counts[i - 1];
        }
        let indptr = counts.clone();

        let mut cursor = counts;
        let mut indices = vec![0u32; self.fwd_indices.len()];
        for src in 0..self.n {
            for &dst in self.successors(src as u32) {
                let slot = &mut cursor[dst as usize];
                indices[*slot as usize] = src as u32;
                *slot += 1;
            }
        }
        (indptr, indices)
    }
}

fn slice_for<'a>(indptr: &[u64], indices: &'a [u32], node: u32) -> &'a [u32] {
    let start = indptr[node as usize] as usize;
    let end = indptr[node as usize + 1] as usize;
    &indices[start..end]
}
