//! Range-keyed lookup tables
//!
//! The reference data keys outcomes by inclusive ranges written as
//! "start-end" strings (e.g. "1-5" or "12-12"). A roll resolves to the
//! outcome whose range contains it; a roll outside every range resolves
//! to nothing, which callers treat as a defect in the reference data.

use std::collections::HashMap;

use thiserror::Error;

/// Error when parsing a "start-end" range key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeParseError {
    /// The key is not of the form "start-end"
    #[error("Invalid range key '{0}': expected 'start-end'")]
    InvalidKey(String),
    /// A bound is not a valid integer
    #[error("Invalid bound in range key '{0}'")]
    InvalidBound(String),
    /// The start bound exceeds the end bound
    #[error("Range key '{0}' has start greater than end")]
    EmptyRange(String),
}

/// One inclusive range and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    pub start: i32,
    pub end: i32,
    pub outcome: String,
}

/// A lookup table mapping inclusive integer ranges to outcomes
///
/// Ranges are assumed disjoint; entry order does not affect resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable {
    pub entries: Vec<RangeEntry>,
}

impl RangeTable {
    /// Build a table from raw "start-end" keyed pairs as they appear in
    /// the reference data files
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, RangeParseError> {
        let mut entries = Vec::with_capacity(map.len());
        for (key, outcome) in map {
            let (start_str, end_str) = key
                .split_once('-')
                .ok_or_else(|| RangeParseError::InvalidKey(key.clone()))?;
            let start: i32 = start_str
                .trim()
                .parse()
                .map_err(|_| RangeParseError::InvalidBound(key.clone()))?;
            let end: i32 = end_str
                .trim()
                .parse()
                .map_err(|_| RangeParseError::InvalidBound(key.clone()))?;
            if start > end {
                return Err(RangeParseError::EmptyRange(key.clone()));
            }
            entries.push(RangeEntry {
                start,
                end,
                outcome: outcome.clone(),
            });
        }
        // HashMap iteration order is arbitrary; keep entries readable
        entries.sort_by_key(|e| e.start);
        Ok(Self { entries })
    }

    /// Resolve a roll to the outcome whose range contains it
    pub fn resolve(&self, roll: i32) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.start <= roll && roll <= e.end)
            .map(|e| e.outcome.as_str())
    }

    /// Number of integers covered by all ranges combined
    ///
    /// For disjoint ranges this equals the size of the resolvable domain,
    /// which lets callers check full coverage of a die's outcomes.
    pub fn covered_size(&self) -> usize {
        self.entries
            .iter()
            .map(|e| (e.end - e.start + 1) as usize)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> RangeTable {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RangeTable::from_map(&map).unwrap()
    }

    #[test]
    fn test_resolve_within_ranges() {
        let table = table(&[("1-2", "Lawful"), ("3-4", "Neutral"), ("5-6", "Chaotic")]);
        assert_eq!(table.resolve(1), Some("Lawful"));
        assert_eq!(table.resolve(2), Some("Lawful"));
        assert_eq!(table.resolve(3), Some("Neutral"));
        assert_eq!(table.resolve(6), Some("Chaotic"));
    }

    #[test]
    fn test_resolve_single_value_range() {
        let table = table(&[("1-11", "common"), ("12-12", "rare")]);
        assert_eq!(table.resolve(12), Some("rare"));
    }

    #[test]
    fn test_resolve_miss_returns_none() {
        let table = table(&[("1-2", "a"), ("5-6", "b")]);
        assert_eq!(table.resolve(0), None);
        assert_eq!(table.resolve(3), None);
        assert_eq!(table.resolve(7), None);
    }

    #[test]
    fn test_full_domain_coverage() {
        let table = table(&[("1-5", "human"), ("6-7", "elf"), ("8-12", "dwarf")]);
        for roll in 1..=12 {
            assert!(table.resolve(roll).is_some(), "roll {} not covered", roll);
        }
        assert_eq!(table.covered_size(), 12);
    }

    #[test]
    fn test_parse_invalid_key() {
        let mut map = HashMap::new();
        map.insert("five".to_string(), "x".to_string());
        assert!(matches!(
            RangeTable::from_map(&map),
            Err(RangeParseError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_parse_invalid_bound() {
        let mut map = HashMap::new();
        map.insert("1-b".to_string(), "x".to_string());
        assert!(matches!(
            RangeTable::from_map(&map),
            Err(RangeParseError::InvalidBound(_))
        ));
    }

    #[test]
    fn test_parse_inverted_range() {
        let mut map = HashMap::new();
        map.insert("6-1".to_string(), "x".to_string());
        assert!(matches!(
            RangeTable::from_map(&map),
            Err(RangeParseError::EmptyRange(_))
        ));
    }

    #[test]
    fn test_entries_sorted_by_start() {
        let table = table(&[("8-12", "c"), ("1-5", "a"), ("6-7", "b")]);
        let starts: Vec<i32> = table.entries.iter().map(|e| e.start).collect();
        assert_eq!(starts, vec![1, 6, 8]);
    }
}
