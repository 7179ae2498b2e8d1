//! Turns a completed [`SearchState`] into a path count or a fully enumerated
//! path list.
//!
//! `spec.md` §6. Every bridge node is the midpoint of one or more shortest
//! paths: walking its `forward_preds` chain back out gives every shortest
//! prefix from the source, walking its `backward_succs` chain gives every
//! shortest suffix to the target, and the cross product of the two (joined
//! on the shared bridge node) gives every shortest path through it. Summing
//! — or concatenating — across all bridges gives the full answer.

use std::collections::HashMap;

use crate::search::SearchState;

/// The graph-level result of a search: a hop count, a path count, and
/// (in enumerate mode) the paths themselves as id sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembled {
    pub degrees_of_separation: Option<u8>,
    pub path_count: u64,
    pub paths: Option<Vec<Vec<u32>>>,
}

/// Builds the result for a search that found no path within the cutoff.
/// In enumerate mode the path list is an empty list, not absent — the
/// caller asked for paths and there simply are none.
pub fn no_path(enumerate: bool) -> Assembled {
    Assembled {
        degrees_of_separation: None,
        path_count: 0,
        paths: enumerate.then(Vec::new),
    }
}

/// Builds the result for the trivial zero-hop case, `source == target`.
pub fn trivial(node: u32, enumerate: bool) -> Assembled {
    Assembled {
        degrees_of_separation: Some(0),
        path_count: 1,
        paths: enumerate.then(|| vec![vec![node]]),
    }
}

/// Assembles the result from a non-trivial completed search.
pub fn assemble(state: &SearchState, enumerate: bool) -> Assembled {
    let Some(degrees_of_separation) = state.degrees_of_separation else {
        return no_path(enumerate);
    };

    if enumerate {
        let mut prefix_memo = HashMap::new();
        let mut suffix_memo = HashMap::new();
        let mut paths = Vec::new();
        for &bridge in &state.bridges {
            let prefixes = paths_to_bridge(bridge, state, &mut prefix_memo);
            let suffixes = paths_from_bridge(bridge, state, &mut suffix_memo);
            for prefix in &prefixes {
                for suffix in &suffixes {
                    let mut joined = prefix.clone();
                    joined.extend_from_slice(&suffix[1..]);
                    paths.push(joined);
                }
            }
        }
        Assembled {
            degrees_of_separation: Some(degrees_of_separation),
            path_count: paths.len() as u64,
            paths: Some(paths),
        }
    } else {
        let mut prefix_memo = HashMap::new();
        let mut suffix_memo = HashMap::new();
        let path_count: u64 = state
            .bridges
            .iter()
            .map(|&bridge| {
                count_to_bridge(bridge, state, &mut prefix_memo)
                    * count_from_bridge(bridge, state, &mut suffix_memo)
            })
            .sum();
        Assembled {
            degrees_of_separation: Some(degrees_of_separation),
            path_count,
            paths: None,
        }
    }
}

/// Every shortest path from `state.source` up to and including `node`.
fn paths_to_bridge(
    node: u32,
    state: &SearchState,
    memo: &mut HashMap<u32, Vec<Vec<u32>>>,
) -> Vec<Vec<u32>> {
    if node == state.source {
        return vec![vec![node]];
    }
    if let Some(cached) = memo.get(&node) {
        return cached.clone();
    }
    let mut result = Vec::new();
    if let Some(preds) = state.forward_preds.get(&node) {
        for &pred in preds {
            for mut path in paths_to_bridge(pred, state, memo) {
                path.push(node);
                result.push(path);
            }
        }
    }
    memo.insert(node, result.clone());
    result
}

/// Every shortest path from `node` down to and including `state.target`.
fn paths_from_bridge(
    node: u32,
    state: &SearchState,
    memo: &mut HashMap<u32, Vec<Vec<u32>>>,
) -> Vec<Vec<u32>> {
    if node == state.target {
        return vec![vec![node]];
    }
    if let Some(cached) = memo.get(&node) {
        return cached.clone();
    }
    let mut result = Vec::new();
    if let Some(succs) = state.backward_succs.get(&node) {
        for &succ in succs {
            for mut path in paths_from_bridge(succ, state, memo) {
                path.insert(0, node);
                result.push(path);
            }
        }
    }
    memo.insert(node, result.clone());
    result
}

fn count_to_bridge(node: u32, state: &SearchState, memo: &mut HashMap<u32, u64>) -> u64 {
    if node == state.source {
        return 1;
    }
    if let Some(&cached) = memo.get(&node) {
        return cached;
    }
    let total = state
        .forward_preds
        .get(&node)
        .map(|preds| preds.iter().map(|&p| count_to_bridge(p, state, memo)).sum())
        .unwrap_or(0);
    memo.insert(node, total);
    total
}

fn count_from_bridge(node: u32, state: &SearchState, memo: &mut HashMap<u32, u64>) -> u64 {
    if node == state.target {
        return 1;
    }
    if let Some(&cached) = memo.get(&node) {
        return cached;
    }
    let total = state
        .backward_succs
        .get(&node)
        .map(|succs| succs.iter().map(|&s| count_from_bridge(s, state, memo)).sum())
        .unwrap_or(0);
    memo.insert(node, total);
    total
}
