//! Bidirectional alternating BFS over a [`NeighborOracle`].
//!
//! `spec.md` §5. Two BFS trees grow in lockstep, one rooted at the query
//! source walking forward, one rooted at the target walking backward, each
//! expanding one level at a time and checked for a meeting point — a
//! "bridge" node reachable from both sides — after every expansion. The
//! trees never grow past the configured `max_depth` combined hops,
//! matching the original six-degrees cutoff by default
//! ([`topograph_common::MAX_DEPTH`]).
//!
//! Both BFS trees keep every predecessor that reaches a node at its shortest
//! level, not just the first one found — a node can be discovered via
//! several equally-short edges, and every one of them roots a distinct
//! shortest path. [`crate::assemble`] walks those predecessor sets back out
//! into concrete paths or, in count mode, just multiplies their sizes.

use std::collections::{HashMap, HashSet};

use crate::oracle::{Direction, NeighborOracle};

/// Everything the path assembler needs to turn a completed bidirectional
/// search into either a path count or a fully enumerated path list.
#[derive(Debug)]
pub struct SearchState {
    pub source: u32,
    pub target: u32,
    /// Total hop count of the shortest source-to-target path, if one exists
    /// within the search's configured `max_depth`.
    pub degrees_of_separation: Option<u8>,
    /// Nodes at which the forward and backward trees meet at the minimal
    /// combined depth, in ascending id order.
    pub bridges: Vec<u32>,
    pub forward_dist: HashMap<u32, u8>,
    pub backward_dist: HashMap<u32, u8>,
    /// For each node, every predecessor on a shortest forward path from
    /// `source` to it.
    pub forward_preds: HashMap<u32, Vec<u32>>,
    /// For each node, every successor on a shortest backward path from it
    /// to `target`.
    pub backward_succs: HashMap<u32, Vec<u32>>,
}

/// Runs the bidirectional search and returns the tree state needed to
/// assemble a count or an enumerated path list. Returns `None` if `source`
/// and `target` are the same node — that case has no edges to traverse and
/// is handled directly by the caller as the trivial zero-hop path.
///
/// `max_depth` bounds the combined forward+backward depth explored, per
/// `spec.md` §4.5's `MAX_DEPTH` cutoff; callers use
/// [`topograph_common::MAX_DEPTH`] in production and a smaller value in
/// tests that want to exercise cutoff behavior without six full layers.
pub fn search(
    oracle: &NeighborOracle<'_>,
    source: u32,
    target: u32,
    direction: Direction,
    max_depth: u8,
) -> Option<SearchState> {
    if source == target {
        return None;
    }

    let mut forward_dist = HashMap::new();
    let mut backward_dist = HashMap::new();
    let mut forward_preds: HashMap<u32, Vec<u32>> = HashMap::new();
    let mut backward_succs: HashMap<u32, Vec<u32>> = HashMap::new();

    forward_dist.insert(source, 0u8);
    backward_dist.insert(target, 0u8);

    let mut forward_frontier = vec![source];
    let mut backward_frontier = vec![target];

    let mut best_total: Option<u8> = None;
    let mut bridges: HashSet<u32> = HashSet::new();

    let mut forward_level = 0u8;
    let mut backward_level = 0u8;

    // Finding *a* bridge isn't enough to stop: the smaller-frontier
    // heuristic can reach a node through a long detour on one side before
    // the other side has explored far enough to find a shorter meeting
    // point. Keep expanding until the combined explored depth reaches the
    // best total found so far — at that point every node with a smaller
    // combined distance would already have been seen on both sides.
    loop {
        if let Some(best) = best_total {
            if forward_level + backward_level >= best {
                break;
            }
        }
        if forward_level + backward_level >= max_depth {
            break;
        }
        // Expand whichever frontier is smaller, alternating on ties, so the
        // search grows the cheaper side first without ever exceeding the
        // combined cutoff. A frontier that has already run dry never gets
        // chosen over one that still has nodes left to expand.
        let expand_forward = if forward_frontier.is_empty() {
            false
        } else if backward_frontier.is_empty() {
            true
        } else {
            forward_frontier.len() <= backward_frontier.len()
        };

        if expand_forward {
            forward_level += 1;
            forward_frontier = expand_level(
                oracle,
                direction,
                Side::Forward,
                &forward_frontier,
                forward_level,
                &mut forward_dist,
                &mut forward_preds,
            );
        } else {
            backward_level += 1;
            backward_frontier = expand_level(
                oracle,
                direction,
                Side::Backward,
                &backward_frontier,
                backward_level,
                &mut backward_dist,
                &mut backward_succs,
            );
        }

        for &node in if expand_forward {
            &forward_frontier
        } else {
            &backward_frontier
        } {
            if let Some(total) = bridge_total(&forward_dist, &backward_dist, node) {
                match best_total {
                    None => {
                        best_total = Some(total);
                        bridges.insert(node);
                    }
                    Some(current_best) if total == current_best => {
                        bridges.insert(node);
                    }
                    Some(current_best) if total < current_best => {
                        best_total = Some(total);
                        bridges.clear();
                        bridges.insert(node);
                    }
                    _ => {}
                }
            }
        }

        if forward_frontier.is_empty() && backward_frontier.is_empty() {
            break;
        }
    }

    let mut bridges: Vec<u32> = bridges.into_iter().collect();
    bridges.sort_unstable();

    Some(SearchState {
        source,
        target,
        degrees_of_separation: best_total,
        bridges,
        forward_dist,
        backward_dist,
        forward_preds,
        backward_succs,
    })
}

fn bridge_total(
    forward_dist: &HashMap<u32, u8>,
    backward_dist: &HashMap<u32, u8>,
    node: u32,
) -> Option<u8> {
    match (forward_dist.get(&node), backward_dist.get(&node)) {
        (Some(&f), Some(&b)) => Some(f + b),
        _ => None,
    }
}

enum Side {
    Forward,
    Backward,
}

/// Expands one BFS level on one side of the search, recording every edge
/// that reaches a newly-discovered node at this level (or that reaches an
/// already-discovered node via a second shortest edge).
fn expand_level(
    oracle: &NeighborOracle<'_>,
    direction: Direction,
    side: Side,
    frontier: &[u32],
    level: u8,
    dist: &mut HashMap<u32, u8>,
    preds: &mut HashMap<u32, Vec<u32>>,
) -> Vec<u32> {
    let mut next_frontier = Vec::new();
    let mut seen_this_level = HashSet::new();

    for &node in frontier {
        let neighbors = match side {
            Side::Forward => oracle.forward(node, direction),
            Side::Backward => oracle.backward(node, direction),
        };
        for nbr in neighbors {
            match dist.get(&nbr) {
                None => {
                    dist.insert(nbr, level);
                    preds.entry(nbr).or_default().push(node);
                    if seen_this_level.insert(nbr) {
                        next_frontier.push(nbr);
                    }
                }
                Some(&existing) if existing == level => {
                    preds.entry(nbr).or_default().push(node);
                }
                _ => {}
            }
        }
    }

    next_frontier
}
