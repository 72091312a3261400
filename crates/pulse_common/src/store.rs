//! Telemetry store - the immutable snapshot queried by the aggregator.
//!
//! Loaded once at daemon startup from a JSON array of records. A missing or
//! malformed source degrades to the explicit empty store so the daemon still
//! starts and answers with data-unavailable instead of crashing.

use crate::error::PulseError;
use crate::types::{RegionInfo, TelemetryRecord};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Immutable, region-indexed collection of telemetry records.
///
/// Read-only after construction: no method takes `&mut self`.
#[derive(Debug, Default)]
pub struct TelemetryStore {
    records: Vec<TelemetryRecord>,
    index: HashMap<String, Vec<usize>>,
}

impl TelemetryStore {
    /// The designated empty-store sentinel.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from in-memory records, validating each against the
    /// data model invariants and indexing them by region.
    pub fn from_records(records: Vec<TelemetryRecord>) -> Result<Self, PulseError> {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|reason| PulseError::InvalidRecord { index: pos, reason })?;
            index.entry(record.region.clone()).or_default().push(pos);
        }
        Ok(Self { records, index })
    }

    /// Load the snapshot from disk, degrading to the empty store on any
    /// failure (absent file, unreadable file, malformed JSON, invalid record).
    pub fn load(path: &Path) -> Self {
        match Self::load_from_path(path) {
            Ok(store) => store,
            Err(e) => {
                warn!(
                    "telemetry source {} unusable, starting with empty store: {}",
                    path.display(),
                    e
                );
                Self::empty()
            }
        }
    }

    fn load_from_path(path: &Path) -> Result<Self, PulseError> {
        let content = fs::read_to_string(path)?;
        let records: Vec<TelemetryRecord> = serde_json::from_str(&content)?;
        let store = Self::from_records(records)?;
        info!(
            "loaded {} telemetry record(s) across {} region(s) from {}",
            store.len(),
            store.region_count(),
            path.display()
        );
        Ok(store)
    }

    /// All records of a region, in original load order. Empty for unknown
    /// regions - not an error.
    pub fn records_for(&self, region: &str) -> Vec<&TelemetryRecord> {
        self.index
            .get(region)
            .map(|positions| positions.iter().map(|&pos| &self.records[pos]).collect())
            .unwrap_or_default()
    }

    /// True iff the store holds zero records (dataset missing, as opposed to
    /// a present dataset where some region is absent).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn region_count(&self) -> usize {
        self.index.len()
    }

    /// Inventory of distinct regions with record counts, sorted by name.
    pub fn regions(&self) -> Vec<RegionInfo> {
        let mut regions: Vec<RegionInfo> = self
            .index
            .iter()
            .map(|(region, positions)| RegionInfo {
                region: region.clone(),
                records: positions.len(),
            })
            .collect();
        regions.sort_by(|a, b| a.region.cmp(&b.region));
        regions
    }
}
