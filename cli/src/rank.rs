use genregraph_core::{SimilarityConfig, UnscoreablePolicy};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::{error::Error, path::Path};

pub type Pool = Vec<(String, Vec<String>)>;

/// One track of a pool file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PoolEntry {
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

pub fn parse_pool(json: &str) -> Result<Pool, Box<dyn Error>> {
    let entries: Vec<PoolEntry> = serde_json::from_str(json)?;

    let mut seen = FxHashSet::default();
    for entry in &entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(format!("Duplicate track id in pool: '{}'", entry.id).into());
        }
    }

    Ok(entries
        .into_iter()
        .map(|entry| (entry.id, entry.tags))
        .collect())
}

pub fn load_pool(path: &Path) -> Result<Pool, Box<dyn Error>> {
    let json = std::fs::read_to_string(path)
        .map_err(|error| format!("Cannot read pool file {:?}: {}", path, error))?;
    parse_pool(&json)
}

pub fn similarity_config(
    limit: Option<usize>,
    max_distance: Option<f32>,
    broaden: bool,
    unscoreable_as: Option<f32>,
    raw: bool,
) -> SimilarityConfig {
    let unscoreable = match unscoreable_as {
        Some(distance) => UnscoreablePolicy::MaxDistance(distance),
        None => UnscoreablePolicy::Exclude,
    };
    SimilarityConfig::new(max_distance, limit, unscoreable, broaden, !raw)
}
