//! Exercises `Engine::load` against real `topograph-io` artifacts, as
//! opposed to the in-memory `set_graph` hook the other integration test
//! uses.

use topograph_graph::{Config, Direction, Engine, ShortestPaths};

#[test]
fn loads_and_queries_a_graph_persisted_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let index_path = dir.path().join("topics.tgidx");
    let adjacency_path = dir.path().join("graph.tgcsr");

    // 0: rust -> {1: cargo}, 1: cargo -> {2: crates.io}, 2: crates.io -> {}
    let index = topograph_io::TopicIndex::new(vec![
        "rust".to_string(),
        "cargo".to_string(),
        "crates.io".to_string(),
    ]);
    index.write(&index_path).unwrap();

    let adjacency =
        topograph_io::CsrAdjacency::from_adjacency_lists(&[vec![1], vec![2], vec![]], 1_700_000_000);
    adjacency.write(&adjacency_path).unwrap();

    let engine = Engine::load(&index_path, &adjacency_path, Config::default()).unwrap();

    let ShortestPaths::Found(info) =
        engine.shortest_paths("rust", "crates.io", Direction::Directed, true, false)
    else {
        panic!("expected a found result");
    };
    assert_eq!(info.degrees_of_separation, Some(2));
    assert_eq!(
        info.paths,
        Some(vec![vec![
            "rust".to_string(),
            "cargo".to_string(),
            "crates.io".to_string(),
        ]])
    );
}
