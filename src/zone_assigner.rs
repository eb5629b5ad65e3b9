// src/zone_assigner.rs
//
// Sticky zone assignment. A track is tested against the zone rectangles
// exactly once — on the frame it first appears — and the result (a zone
// index or "not in zone") is permanent for the track's lifetime. A track
// that misses every zone on first sighting stays unassigned forever, even
// if it later walks into one.

use crate::error::PipelineError;
use crate::types::{ZoneKey, ZoneRect};
use std::collections::HashMap;
use tracing::debug;

pub struct ZoneAssigner {
    assigned: HashMap<u32, ZoneKey>,
}

impl ZoneAssigner {
    pub fn new() -> Self {
        Self {
            assigned: HashMap::new(),
        }
    }

    /// Resolve the zone for every id in the current frame. New ids get their
    /// bottom midpoint tested against the zones in index order with strict
    /// containment; the first satisfying zone wins. Known ids are a map
    /// lookup, no geometry re-test.
    pub fn assign(
        &mut self,
        zones: &[ZoneRect],
        ids: &[u32],
        btm_midpoints: &[[f32; 2]],
        frame_id: u64,
    ) -> Result<HashMap<u32, ZoneKey>, PipelineError> {
        if ids.len() != btm_midpoints.len() {
            return Err(PipelineError::MisalignedArrays {
                frame_id,
                field: "btm_midpoint",
                ids: ids.len(),
                other: btm_midpoints.len(),
            });
        }

        for (i, &id) in ids.iter().enumerate() {
            if self.assigned.contains_key(&id) {
                continue;
            }
            let [x, y] = btm_midpoints[i];
            let key = zones
                .iter()
                .position(|zone| zone.contains(x, y))
                .map(ZoneKey::Zone)
                .unwrap_or(ZoneKey::NotInZone);
            debug!(
                "Track {} first seen at ({:.1},{:.1}) → {}",
                id,
                x,
                y,
                key.label()
            );
            self.assigned.insert(id, key);
        }

        Ok(ids
            .iter()
            .map(|id| (*id, self.assigned[id]))
            .collect())
    }

    /// Distinct ids assigned so far (grows for the process lifetime).
    pub fn tracked_count(&self) -> usize {
        self.assigned.len()
    }
}
