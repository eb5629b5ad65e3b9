// src/bbox_filter.rs
//
// Zone-based detection filter. Drops tracks whose bounding box does not sit
// fully inside the first zone's horizontal span — both edges strictly
// inside; top and bottom edges are ignored. The id, bbox and bottom-midpoint
// entries for a dropped box are removed together so the frame's parallel
// arrays stay aligned.

use crate::types::{FrameObservation, ZoneRect};
use tracing::debug;

pub struct ZoneBboxFilter {
    left: f32,
    right: f32,
}

impl ZoneBboxFilter {
    /// Only one zone is supported for filtering; callers pass the first
    /// configured zone.
    pub fn new(zone: &ZoneRect) -> Self {
        Self {
            left: zone.x1,
            right: zone.x2,
        }
    }

    fn keeps(&self, bbox: &[f32; 4]) -> bool {
        bbox[0] > self.left && bbox[2] < self.right
    }

    /// Filter a frame in place. Returns the number of tracks dropped.
    pub fn apply(&self, obs: &mut FrameObservation) -> usize {
        let before = obs.ids.len();
        let kept: Vec<bool> = obs.bboxes.iter().map(|b| self.keeps(b)).collect();
        if kept.iter().all(|&k| k) {
            return 0;
        }

        let mut keep = kept.iter().copied();
        obs.ids.retain(|_| keep.next().unwrap());
        let mut keep = kept.iter().copied();
        obs.bboxes.retain(|_| keep.next().unwrap());
        let mut keep = kept.iter().copied();
        obs.btm_midpoint.retain(|_| keep.next().unwrap());

        let dropped = before - obs.ids.len();
        debug!(
            "Frame {}: bbox filter dropped {} of {} boxes outside x-span [{:.1}, {:.1}]",
            obs.frame_id, dropped, before, self.left, self.right
        );
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ZonePolygon;

    fn filter() -> ZoneBboxFilter {
        let zone = ZonePolygon {
            points: [[100.0, 0.0], [400.0, 0.0], [400.0, 300.0], [100.0, 300.0]],
        };
        ZoneBboxFilter::new(&zone.to_rect())
    }

    fn frame(bboxes: Vec<[f32; 4]>) -> FrameObservation {
        let ids = (0..bboxes.len() as u32).collect();
        let btm_midpoint = bboxes
            .iter()
            .map(|b| [(b[0] + b[2]) / 2.0, b[3]])
            .collect();
        FrameObservation {
            frame_id: 1,
            timestamp: 0.0,
            ids,
            bboxes,
            btm_midpoint,
        }
    }

    #[test]
    fn test_retains_boxes_inside_span() {
        let mut obs = frame(vec![[150.0, 10.0, 350.0, 200.0]]);
        assert_eq!(filter().apply(&mut obs), 0);
        assert_eq!(obs.ids, vec![0]);
    }

    #[test]
    fn test_drops_boxes_crossing_borders() {
        let mut obs = frame(vec![
            [50.0, 10.0, 200.0, 200.0],  // left edge outside
            [150.0, 10.0, 350.0, 200.0], // inside
            [300.0, 10.0, 450.0, 200.0], // right edge outside
            [100.0, 10.0, 300.0, 200.0], // left edge on the border
        ]);
        assert_eq!(filter().apply(&mut obs), 3);
        assert_eq!(obs.ids, vec![1]);
        assert_eq!(obs.bboxes.len(), 1);
        assert_eq!(obs.btm_midpoint.len(), 1);
    }

    #[test]
    fn test_vertical_extent_ignored() {
        // Box far above the zone vertically still passes; only the x-span counts.
        let mut obs = frame(vec![[150.0, -500.0, 350.0, -400.0]]);
        assert_eq!(filter().apply(&mut obs), 0);
        assert_eq!(obs.ids.len(), 1);
    }
}
