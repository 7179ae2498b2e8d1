//! Demonstrates wiring the engine up to `env_logger`, the way
//! `butterfly-dl`'s binary calls `env_logger::Builder::from_default_env()`
//! at startup. A library crate has no such startup hook of its own, but the
//! ambient logging stack still needs a real call site exercising it, rather
//! than sitting in the workspace manifest unused.

use topograph_graph::{Config, Direction, Engine, ShortestPaths};

#[test]
fn verbose_queries_log_through_env_logger() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();

    let engine = Engine::set_graph(
        &[
            ("rust", vec!["cargo"]),
            ("cargo", vec!["crates.io"]),
            ("crates.io", vec![]),
        ],
        Config::default(),
    );

    let ShortestPaths::Found(info) =
        engine.shortest_paths("rust", "crates.io", Direction::Directed, false, true)
    else {
        panic!("expected a found result");
    };
    assert_eq!(info.degrees_of_separation, Some(2));
}
