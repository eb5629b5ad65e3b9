// src/pipeline/frame_context.rs
//
// Single source of truth for one frame's derived signals. Every downstream
// consumer (replay output, debug dump, final report) reads from the same
// result instead of re-deriving per-component values.

use crate::types::TrackReport;
use crate::zone_aggregator::ZoneTotals;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FrameResult {
    pub frame_id: u64,
    pub timestamp: f64,
    /// Per-track attributes in the frame's id order.
    pub tracks: Vec<TrackReport>,
    /// Per-zone counts and jump sums, keyed in string-sorted order.
    pub zones: ZoneTotals,
}

impl FrameResult {
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}
