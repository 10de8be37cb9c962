//! Region Data Management
//!
//! Immutable region id → `RegionDataBundle` map, built once at startup from
//! either the built-in dataset or a JSON file, then shared read-only.

pub mod policies;
pub mod regions;
pub mod types;

pub use policies::{baseline_policy, find_policy, policy_or_baseline, policy_scenarios, BASELINE_POLICY_ID};
pub use types::*;

use crate::error::{DataError, DataResult};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One region as stored in a JSON region file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionFileEntry {
    /// Selector label, e.g. "Memphis, TN"
    pub name: String,
    pub data: RegionDataBundle,
}

/// Read-only regional dataset keyed by region id
#[derive(Debug, Clone)]
pub struct RegionDatabase {
    regions: FxHashMap<String, RegionDataBundle>,
    /// Selector order
    summaries: Vec<RegionSummary>,
}

impl RegionDatabase {
    /// Memphis, Birmingham and Atlanta mock dataset
    pub fn builtin() -> Self {
        let entries = regions::builtin_regions();
        let mut db = Self {
            regions: FxHashMap::default(),
            summaries: Vec::with_capacity(entries.len()),
        };
        for (summary, bundle) in entries {
            db.regions.insert(summary.id.clone(), bundle);
            db.summaries.push(summary);
        }
        db
    }

    /// Build from explicit entries, validating every bundle
    pub fn from_entries(entries: Vec<RegionFileEntry>) -> DataResult<Self> {
        if entries.is_empty() {
            return Err(DataError::Invalid("region dataset is empty".to_string()));
        }

        let mut regions = FxHashMap::default();
        let mut summaries = Vec::with_capacity(entries.len());

        for entry in entries {
            validate_bundle(&entry.data)?;
            let id = entry.data.context.id.clone();
            if regions.contains_key(&id) {
                return Err(DataError::Invalid(format!("duplicate region id '{}'", id)));
            }
            summaries.push(RegionSummary { id: id.clone(), name: entry.name });
            regions.insert(id, entry.data);
        }

        Ok(Self { regions, summaries })
    }

    /// Load a JSON array of `RegionFileEntry`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read region data file: {:?}", path))?;

        let entries: Vec<RegionFileEntry> = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse region data JSON")?;

        let db = Self::from_entries(entries)
            .with_context(|| format!("Invalid region data in {:?}", path))?;

        tracing::info!("Loaded {} regions from {:?}", db.len(), path);
        Ok(db)
    }

    pub fn get(&self, region_id: &str) -> Option<&RegionDataBundle> {
        self.regions.get(region_id)
    }

    /// Available regions in selector order
    pub fn regions(&self) -> &[RegionSummary] {
        &self.summaries
    }

    /// Entries in selector order, suitable for writing back to a region file
    pub fn to_entries(&self) -> Vec<RegionFileEntry> {
        self.summaries
            .iter()
            .filter_map(|s| {
                self.regions.get(&s.id).map(|data| RegionFileEntry {
                    name: s.name.clone(),
                    data: data.clone(),
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Default for RegionDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Sector multipliers must be positive finite ratios; ids must be present
fn validate_bundle(bundle: &RegionDataBundle) -> DataResult<()> {
    if bundle.context.id.trim().is_empty() {
        return Err(DataError::Invalid("region with empty id".to_string()));
    }

    for sector in &bundle.sectors {
        let multipliers = [
            ("base_output_multiplier", sector.base_output_multiplier),
            ("base_jobs_multiplier", sector.base_jobs_multiplier),
            ("owner_adjusted_output_multiplier", sector.owner_adjusted_output_multiplier),
            ("owner_adjusted_jobs_multiplier", sector.owner_adjusted_jobs_multiplier),
        ];
        for (field, value) in multipliers {
            if !value.is_finite() || value <= 0.0 {
                return Err(DataError::Invalid(format!(
                    "sector '{}' in region '{}' has non-positive {} ({})",
                    sector.id, bundle.context.id, field, value
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_three_regions_in_order() {
        let db = RegionDatabase::builtin();
        assert_eq!(db.len(), 3);
        let ids: Vec<&str> = db.regions().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["memphis", "birmingham", "atlanta"]);
        assert_eq!(db.regions()[0].name, "Memphis, TN");
    }

    #[test]
    fn test_unknown_region_is_none() {
        let db = RegionDatabase::builtin();
        assert!(db.get("detroit").is_none());
        assert!(db.get("memphis").is_some());
    }

    #[test]
    fn test_entries_roundtrip_through_json() {
        let db = RegionDatabase::builtin();
        let json = serde_json::to_string(&db.to_entries()).unwrap();
        let entries: Vec<RegionFileEntry> = serde_json::from_str(&json).unwrap();
        let reloaded = RegionDatabase::from_entries(entries).unwrap();
        assert_eq!(reloaded.regions(), db.regions());
        assert_eq!(reloaded.get("atlanta"), db.get("atlanta"));
    }

    #[test]
    fn test_rejects_zero_multiplier() {
        let mut bundle = regions::memphis();
        bundle.sectors[0].base_jobs_multiplier = 0.0;
        let entries = vec![RegionFileEntry { name: "Memphis, TN".to_string(), data: bundle }];
        let err = RegionDatabase::from_entries(entries).unwrap_err();
        assert!(err.to_string().contains("base_jobs_multiplier"));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let entries = vec![
            RegionFileEntry { name: "A".to_string(), data: regions::memphis() },
            RegionFileEntry { name: "B".to_string(), data: regions::memphis() },
        ];
        assert!(matches!(
            RegionDatabase::from_entries(entries),
            Err(DataError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_empty_dataset() {
        assert!(RegionDatabase::from_entries(vec![]).is_err());
    }

    #[test]
    fn test_from_json_file_missing_path() {
        let result = RegionDatabase::from_json_file(Path::new("/nonexistent/regions.json"));
        assert!(result.is_err());
    }
}
