//! Public entry point: loads a graph and answers shortest-path queries
//! against it.
//!
//! `spec.md` §7. Ties the [`Index`], [`AdjacencyStore`], [`NeighborOracle`],
//! bidirectional [`search`], and [`assemble`] together behind a small,
//! stateless-per-call API.

use std::collections::HashSet;
use std::path::Path;

use topograph_common::{canonicalize, Error, Result};

use crate::adjacency::AdjacencyStore;
use crate::assemble::{self, Assembled};
use crate::config::Config;
use crate::index::Index;
use crate::oracle::{Direction, NeighborOracle};
use crate::search;

/// The result of a successful shortest-paths query for two known topics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsInfo {
    /// Hop count of the shortest path, or `None` if no path exists within
    /// the six-hop cutoff.
    pub degrees_of_separation: Option<u8>,
    /// Number of distinct shortest paths. Zero iff `degrees_of_separation`
    /// is `None`.
    pub path_count: u64,
    /// The paths themselves, as topic-name sequences, lexicographically
    /// sorted. Only populated when the query asked to enumerate.
    pub paths: Option<Vec<Vec<String>>>,
}

/// Outcome of a [`Engine::shortest_paths`] query. Unknown topics are a
/// normal outcome, not an error — `spec.md` §8 treats lookup failure as a
/// value callers branch on, not a `Result::Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortestPaths {
    Found(PathsInfo),
    UnknownSource,
    UnknownTarget,
}

/// A loaded topic graph, ready to answer children/ancestors/shortest-path
/// queries.
pub struct Engine {
    index: Index,
    store: AdjacencyStore,
    config: Config,
}

impl Engine {
    /// Loads an index and adjacency store from their persisted artifacts.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        index_path: P,
        adjacency_path: Q,
        config: Config,
    ) -> Result<Self> {
        let index = Index::load(index_path)?;
        log::info!("loaded topic index with {} topics", index.size());
        let store = AdjacencyStore::load(adjacency_path)?;
        log::info!(
            "loaded adjacency store with {} nodes, optimize_memory={}",
            store.n(),
            config.optimize_memory
        );
        Ok(Self {
            index,
            store,
            config,
        })
    }

    /// Builds a graph directly from `(topic, children)` pairs, assigning ids
    /// in first-seen order while walking the pairs — the same order the
    /// reference `set_graph` test hook uses. For tests and small examples;
    /// production graphs are built by `topograph-fetch` and loaded via
    /// [`Engine::load`].
    pub fn set_graph<S: AsRef<str>>(pairs: &[(S, Vec<S>)], config: Config) -> Self {
        let mut id_of_topic = std::collections::HashMap::new();
        let mut topic_of_id = Vec::new();

        for (topic, children) in pairs {
            intern(topic.as_ref(), &mut id_of_topic, &mut topic_of_id);
            for child in children {
                intern(child.as_ref(), &mut id_of_topic, &mut topic_of_id);
            }
        }

        let mut adjacency = vec![Vec::new(); topic_of_id.len()];
        for (topic, children) in pairs {
            let tid = id_of_topic[&canonicalize(topic.as_ref())];
            for child in children {
                let cid = id_of_topic[&canonicalize(child.as_ref())];
                adjacency[tid as usize].push(cid);
            }
        }

        Self {
            index: Index::from_topics(topic_of_id),
            store: AdjacencyStore::from_edges(adjacency),
            config,
        }
    }

    fn oracle(&self) -> NeighborOracle<'_> {
        NeighborOracle::new(&self.store, self.config.optimize_memory)
    }

    /// Children of `topic`: direct successors when `directed`, or the
    /// undirected neighbor union (successors and predecessors collapsed
    /// into one set) when not (`spec.md` §4.4/§6).
    ///
    /// Unlike `shortest_paths`, an unknown topic here is an error (`spec.md`
    /// §6) rather than a value the caller branches on — there is no sensible
    /// non-error "children of nothing" to return.
    pub fn children(&self, topic: &str, directed: bool) -> Result<HashSet<String>> {
        let id = self.unknown_topic_checked(topic)?;
        let oracle = self.oracle();
        let ids = if directed {
            oracle.forward(id, Direction::Directed)
        } else {
            oracle.neighbors_undirected(id)
        };
        Ok(self.names_of(ids))
    }

    /// Ancestors (parents) of `topic`: direct predecessors when `directed`,
    /// or the undirected neighbor union when not. See [`Engine::children`]
    /// for the unknown-topic error policy.
    pub fn ancestors(&self, topic: &str, directed: bool) -> Result<HashSet<String>> {
        let id = self.unknown_topic_checked(topic)?;
        let oracle = self.oracle();
        let ids = if directed {
            oracle.backward(id, Direction::Directed)
        } else {
            oracle.neighbors_undirected(id)
        };
        Ok(self.names_of(ids))
    }

    fn names_of(&self, ids: Vec<u32>) -> HashSet<String> {
        ids.into_iter()
            .map(|n| self.index.name_of(n).to_string())
            .collect()
    }

    fn unknown_topic_checked(&self, topic: &str) -> Result<u32> {
        self.index
            .lookup(topic)
            .ok_or_else(|| Error::UnknownTopic(canonicalize(topic)))
    }

    /// Answers a shortest-paths query between `source` and `target`.
    ///
    /// `direction` chooses whether edges are followed as directed or
    /// collapsed into an undirected view; `enumerate` chooses whether to
    /// return the paths themselves (more work) or just their count.
    /// `verbose` additionally logs an info-level summary of the result
    /// (`spec.md` §4.5's "optional verbose diagnostic line") for library
    /// consumers who've wired up a logger but wouldn't otherwise see
    /// per-query output at `debug` level.
    pub fn shortest_paths(
        &self,
        source: &str,
        target: &str,
        direction: Direction,
        enumerate: bool,
        verbose: bool,
    ) -> ShortestPaths {
        let Some(source_id) = self.index.lookup(source) else {
            log::debug!("shortest_paths: unknown source {source:?}");
            return ShortestPaths::UnknownSource;
        };
        let Some(target_id) = self.index.lookup(target) else {
            log::debug!("shortest_paths: unknown target {target:?}");
            return ShortestPaths::UnknownTarget;
        };

        let assembled = match search::search(
            &self.oracle(),
            source_id,
            target_id,
            direction,
            self.config.max_depth,
        ) {
            None => assemble::trivial(source_id, enumerate),
            Some(state) => assemble::assemble(&state, enumerate),
        };

        let info = self.to_paths_info(assembled);
        if verbose {
            log::info!(
                "shortest_paths({source:?}, {target:?}, {direction:?}): degrees={:?} count={}",
                info.degrees_of_separation,
                info.path_count,
            );
        }
        ShortestPaths::Found(info)
    }

    fn to_paths_info(&self, assembled: Assembled) -> PathsInfo {
        let mut paths: Option<Vec<Vec<String>>> = assembled.paths.map(|id_paths| {
            id_paths
                .into_iter()
                .map(|ids| {
                    ids.into_iter()
                        .map(|id| self.index.name_of(id).to_string())
                        .collect()
                })
                .collect()
        });
        if let Some(paths) = paths.as_mut() {
            paths.sort();
        }
        PathsInfo {
            degrees_of_separation: assembled.degrees_of_separation,
            path_count: assembled.path_count,
            paths,
        }
    }
}

fn intern(
    name: &str,
    id_of_topic: &mut std::collections::HashMap<String, u32>,
    topic_of_id: &mut Vec<String>,
) -> u32 {
    let canon = canonicalize(name);
    if let Some(&id) = id_of_topic.get(&canon) {
        return id;
    }
    let id = topic_of_id.len() as u32;
    topic_of_id.push(canon.clone());
    id_of_topic.insert(canon, id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_engine() -> Engine {
        Engine::set_graph(
            &[
                ("rust", vec!["cargo", "wasm"]),
                ("cargo", vec!["crates.io"]),
                ("wasm", vec!["crates.io"]),
                ("crates.io", vec![]),
            ],
            Config::default(),
        )
    }

    #[test]
    fn unknown_topics_are_values_not_errors() {
        let engine = demo_engine();
        assert_eq!(
            engine.shortest_paths("rust", "nonexistent", Direction::Directed, false, false),
            ShortestPaths::UnknownTarget
        );
        assert_eq!(
            engine.shortest_paths("nonexistent", "rust", Direction::Directed, false, false),
            ShortestPaths::UnknownSource
        );
    }

    #[test]
    fn finds_shortest_path_and_counts_both_diamond_branches() {
        let engine = demo_engine();
        let ShortestPaths::Found(info) =
            engine.shortest_paths("rust", "crates.io", Direction::Directed, true, false)
        else {
            panic!("expected a found result");
        };
        assert_eq!(info.degrees_of_separation, Some(2));
        assert_eq!(info.path_count, 2);
        assert_eq!(
            info.paths.unwrap(),
            vec![
                vec!["rust".to_string(), "cargo".to_string(), "crates.io".to_string()],
                vec!["rust".to_string(), "wasm".to_string(), "crates.io".to_string()],
            ]
        );
    }

    #[test]
    fn same_topic_is_zero_degrees_of_separation() {
        let engine = demo_engine();
        let ShortestPaths::Found(info) =
            engine.shortest_paths("rust", "Rust", Direction::Directed, true, false)
        else {
            panic!("expected a found result");
        };
        assert_eq!(info.degrees_of_separation, Some(0));
        assert_eq!(info.path_count, 1);
    }

    #[test]
    fn children_and_ancestors_error_on_unknown_topics() {
        let engine = demo_engine();
        assert!(matches!(
            engine.children("nonexistent", true),
            Err(Error::UnknownTopic(_))
        ));
        assert!(matches!(
            engine.ancestors("nonexistent", true),
            Err(Error::UnknownTopic(_))
        ));
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let engine = demo_engine();
        assert_eq!(
            engine.children("RUST", true).unwrap(),
            engine.children("rust", true).unwrap()
        );
    }

    #[test]
    fn undirected_children_equal_undirected_ancestors_for_a_single_topic() {
        let engine = demo_engine();
        assert_eq!(
            engine.children("cargo", false).unwrap(),
            engine.ancestors("cargo", false).unwrap()
        );
    }

    #[test]
    fn directed_children_are_just_successors() {
        let engine = demo_engine();
        let children = engine.children("rust", true).unwrap();
        assert_eq!(
            children,
            ["cargo", "wasm"].iter().map(|s| s.to_string()).collect()
        );
    }

    #[test]
    fn verbose_flag_does_not_change_the_result() {
        let engine = demo_engine();
        let quiet = engine.shortest_paths("rust", "crates.io", Direction::Directed, false, false);
        let loud = engine.shortest_paths("rust", "crates.io", Direction::Directed, false, true);
        assert_eq!(quiet, loud);
    }

    #[test]
    fn a_custom_max_depth_suppresses_paths_beyond_it() {
        let mut config = Config::default();
        config.max_depth = 1;
        let engine = Engine::set_graph(
            &[
                ("rust", vec!["cargo", "wasm"]),
                ("cargo", vec!["crates.io"]),
                ("wasm", vec!["crates.io"]),
                ("crates.io", vec![]),
            ],
            config,
        );
        let ShortestPaths::Found(info) =
            engine.shortest_paths("rust", "crates.io", Direction::Directed, false, false)
        else {
            panic!("expected a found result");
        };
        assert_eq!(info.degrees_of_separation, None);
        assert_eq!(info.path_count, 0);
    }
}
