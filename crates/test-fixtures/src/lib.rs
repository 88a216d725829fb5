//! Test fixtures for the Sentinel workspace: fluent graph builders, canned
//! scenario graphs, a deterministic synthetic generator for benches, and
//! JSON fixture graphs under `data/`.

pub mod builders;
pub mod synthetic;

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use sentinel_graph::{GraphSnapshot, TransactionGraph};

pub use builders::{abc_chain, chain, fan_in_hub, fan_out_hub, GraphBuilder};
pub use synthetic::{synthetic_graph, SyntheticSpec};

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture graph from `data/graphs/<name>.json`.
///
/// # Panics
/// Panics if the fixture violates graph integrity.
pub fn load_graph(name: &str) -> TransactionGraph {
    let snapshot: GraphSnapshot = load_fixture(&format!("graphs/{name}.json"));
    snapshot
        .build()
        .unwrap_or_else(|e| panic!("Fixture graph {name} is invalid: {e}"))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Names of all fixture graphs, sorted.
pub fn list_graphs() -> Vec<String> {
    let dir = fixtures_root().join("graphs");
    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                path.file_stem().map(|s| s.to_string_lossy().into_owned())
            } else {
                None
            }
        })
        .collect();
    names.sort();
    names
}
