//! Reference data loading - immutable lookup tables read once at startup
//!
//! Five JSON documents define the generation tables: kindred distribution,
//! per-kindred definitions, alignment distribution, quest lists, and name
//! pools. They are loaded before the listener binds and never mutated, so
//! the store is shared across requests via `Arc` with no locking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::value_objects::RangeTable;

/// A kindred's display name and class distribution
#[derive(Debug, Clone)]
pub struct Kindred {
    pub name: String,
    /// Class outcomes keyed by 1d20 ranges
    pub class_table: RangeTable,
}

/// First-name and surname pools for one kindred
#[derive(Debug, Clone, Deserialize)]
pub struct NamePool {
    pub first_names: Vec<String>,
    pub surnames: Vec<String>,
}

/// On-disk shape of one kindred record
#[derive(Debug, Deserialize)]
struct KindredRecord {
    name: String,
    adventurer_class_table: HashMap<String, String>,
}

/// All reference tables, loaded once and read-only thereafter
#[derive(Debug)]
pub struct ContentStore {
    /// Kindred keys by 1d12 ranges
    pub adventurer_kindred: RangeTable,
    /// Kindred key -> definition
    pub kindreds: HashMap<String, Kindred>,
    /// Alignment names by 1d6 ranges
    pub alignments: RangeTable,
    /// Alignment name -> quest descriptions
    pub quests: HashMap<String, Vec<String>>,
    /// Kindred key -> name pools
    pub names: HashMap<String, NamePool>,
}

impl ContentStore {
    /// Load all reference tables from JSON files in `data_dir`
    ///
    /// Malformed range keys fail here; semantic gaps (a kindred with no
    /// name pool, a roll no range covers) only surface during generation.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw_kindred_table: HashMap<String, String> =
            read_json(&data_dir.join("adventurer_kindred.json"))?;
        let adventurer_kindred = RangeTable::from_map(&raw_kindred_table)
            .context("Invalid range key in adventurer_kindred.json")?;

        let raw_kindreds: HashMap<String, KindredRecord> =
            read_json(&data_dir.join("kindreds.json"))?;
        let mut kindreds = HashMap::with_capacity(raw_kindreds.len());
        for (key, record) in raw_kindreds {
            let class_table = RangeTable::from_map(&record.adventurer_class_table)
                .with_context(|| format!("Invalid class table for kindred '{}'", key))?;
            kindreds.insert(
                key,
                Kindred {
                    name: record.name,
                    class_table,
                },
            );
        }

        let raw_alignments: HashMap<String, String> =
            read_json(&data_dir.join("alignments.json"))?;
        let alignments = RangeTable::from_map(&raw_alignments)
            .context("Invalid range key in alignments.json")?;

        let quests: HashMap<String, Vec<String>> = read_json(&data_dir.join("quests.json"))?;
        let names: HashMap<String, NamePool> = read_json(&data_dir.join("names.json"))?;

        tracing::debug!(
            "Loaded reference data: {} kindreds, {} alignments, {} quest lists, {} name pools",
            kindreds.len(),
            alignments.entries.len(),
            quests.len(),
            names.len()
        );

        Ok(Self {
            adventurer_kindred,
            kindreds,
            alignments,
            quests,
            names,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
