//! Reproduces the reference fixture graph and its expected shortest-paths
//! results, directed and undirected.
//!
//! Edges: S→A, S→B, A→C, A→D, B→D, B→E, C→F, D→F, E→G, F→H, G→I, G→J,
//! H→G, H→T, I→T, J→T.

use topograph_graph::{Config, Direction, Engine, ShortestPaths};

fn fixture() -> Engine {
    Engine::set_graph(
        &[
            ("s", vec!["a", "b"]),
            ("a", vec!["c", "d"]),
            ("b", vec!["d", "e"]),
            ("c", vec!["f"]),
            ("d", vec!["f"]),
            ("e", vec!["g"]),
            ("f", vec!["h"]),
            ("g", vec!["i", "j"]),
            ("h", vec!["g", "t"]),
            ("i", vec!["t"]),
            ("j", vec!["t"]),
            ("t", vec![]),
        ],
        Config::default(),
    )
}

fn path(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn found(result: ShortestPaths) -> topograph_graph::PathsInfo {
    match result {
        ShortestPaths::Found(info) => info,
        other => panic!("expected Found, got {other:?}"),
    }
}

#[test]
fn g_to_h_has_no_directed_path() {
    let engine = fixture();
    let info = found(engine.shortest_paths("G", "H", Direction::Directed, true, false));
    assert_eq!(info.degrees_of_separation, None);
    assert_eq!(info.path_count, 0);
    assert_eq!(info.paths, Some(vec![]));
}

#[test]
fn h_to_g_is_a_direct_edge() {
    let engine = fixture();
    let info = found(engine.shortest_paths("H", "G", Direction::Directed, true, false));
    assert_eq!(info.degrees_of_separation, Some(1));
    assert_eq!(info.path_count, 1);
    assert_eq!(info.paths, Some(vec![path(&["h", "g"])]));
}

#[test]
fn s_to_t_directed_has_five_shortest_paths() {
    let engine = fixture();
    let info = found(engine.shortest_paths("S", "T", Direction::Directed, true, false));
    assert_eq!(info.degrees_of_separation, Some(5));
    assert_eq!(info.path_count, 5);
    assert_eq!(
        info.paths,
        Some(vec![
            path(&["s", "a", "c", "f", "h", "t"]),
            path(&["s", "a", "d", "f", "h", "t"]),
            path(&["s", "b", "d", "f", "h", "t"]),
            path(&["s", "b", "e", "g", "i", "t"]),
            path(&["s", "b", "e", "g", "j", "t"]),
        ])
    );
}

#[test]
fn g_to_h_undirected_is_one_hop() {
    let engine = fixture();
    let info = found(engine.shortest_paths("G", "H", Direction::Undirected, true, false));
    assert_eq!(info.degrees_of_separation, Some(1));
    assert_eq!(info.path_count, 1);
    assert_eq!(info.paths, Some(vec![path(&["g", "h"])]));
}

#[test]
fn s_to_t_undirected_gains_a_sixth_path_through_h() {
    let engine = fixture();
    let info = found(engine.shortest_paths("S", "T", Direction::Undirected, true, false));
    assert_eq!(info.degrees_of_separation, Some(5));
    assert_eq!(info.path_count, 6);
    assert!(info
        .paths
        .as_ref()
        .unwrap()
        .contains(&path(&["s", "b", "e", "g", "h", "t"])));
}

#[test]
fn children_of_s_are_a_and_b() {
    let engine = fixture();
    let children = engine.children("S", true).unwrap();
    assert_eq!(
        children,
        ["a", "b"].iter().map(|s| s.to_string()).collect()
    );
}

#[test]
fn ancestors_of_t_are_h_i_j() {
    let engine = fixture();
    let ancestors = engine.ancestors("T", true).unwrap();
    assert_eq!(
        ancestors,
        ["h", "i", "j"].iter().map(|s| s.to_string()).collect()
    );
}

#[test]
fn ancestors_of_s_are_empty() {
    let engine = fixture();
    assert_eq!(engine.ancestors("S", true).unwrap(), std::collections::HashSet::new());
}

#[test]
fn count_mode_agrees_with_enumerate_mode_path_count() {
    let engine = fixture();
    let counted = found(engine.shortest_paths("S", "T", Direction::Directed, false, false));
    let enumerated = found(engine.shortest_paths("S", "T", Direction::Directed, true, false));
    assert_eq!(counted.path_count, enumerated.path_count);
    assert_eq!(counted.paths, None);
}

#[test]
fn undirected_children_equal_undirected_ancestors() {
    let engine = fixture();
    // spec property 8: for every node, undirected children == undirected
    // ancestors, since both collapse to the same neighbor union.
    for topic in ["s", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "t"] {
        assert_eq!(
            engine.children(topic, false).unwrap(),
            engine.ancestors(topic, false).unwrap(),
            "topic {topic} disagreed"
        );
    }
}

#[test]
fn undirected_neighbors_of_g_include_both_directed_neighbors() {
    let engine = fixture();
    // g's directed children are {i, j}; its directed ancestors are {e, h}
    // (h -> g); undirected collapses both into one set.
    let undirected = engine.children("g", false).unwrap();
    assert_eq!(
        undirected,
        ["e", "h", "i", "j"].iter().map(|s| s.to_string()).collect()
    );
}
