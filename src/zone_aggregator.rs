// src/zone_aggregator.rs
//
// Per-zone roll-up of the current frame: how many tracks sit in each zone
// and how many jumps they have accumulated. Only ids present in the current
// frame contribute; historical tracks that dropped out do not. Keys are the
// sticky zone assignments plus the "not in zone" sentinel, emitted in the
// string-sorted order defined by ZoneKey's Ord.

use crate::jump_detector::JumpObservation;
use crate::types::ZoneKey;
use std::collections::{BTreeMap, HashMap};

/// Frame-level zone summaries. BTreeMap keeps the keys in ZoneKey order,
/// which is also the serialization order.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ZoneTotals {
    pub counts: BTreeMap<ZoneKey, u64>,
    pub jump_sums: BTreeMap<ZoneKey, u64>,
}

pub struct ZoneAggregator;

impl ZoneAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Group the current frame's ids by their sticky zone assignment and
    /// fold jump counts into per-zone sums. Both output maps carry the same
    /// key set.
    pub fn combine(
        &self,
        ids: &[u32],
        assignments: &HashMap<u32, ZoneKey>,
        jumps: &HashMap<u32, JumpObservation>,
    ) -> ZoneTotals {
        let mut totals = ZoneTotals::default();
        for id in ids {
            let key = assignments[id];
            *totals.counts.entry(key).or_insert(0) += 1;
            *totals.jump_sums.entry(key).or_insert(0) += jumps[id].jump_count;
        }
        totals
    }
}
