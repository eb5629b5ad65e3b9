// src/pipeline/orchestrator.rs
//
// Per-frame data flow, fixed order: dwell → jump → zone assignment →
// aggregation. One invocation per incoming frame, frames strictly in
// arrival order, all state mutated in place. One pipeline instance per
// stream; independent streams need independent instances.

use crate::dwell_timer::DwellTimer;
use crate::error::PipelineError;
use crate::jump_detector::JumpDetector;
use crate::pipeline::frame_context::FrameResult;
use crate::pipeline::metrics::{MetricsSummary, PipelineMetrics};
use crate::types::{FrameObservation, TrackReport, ZoneRect};
use crate::zone_aggregator::ZoneAggregator;
use crate::zone_assigner::ZoneAssigner;

pub struct ActivityPipeline {
    zones: Vec<ZoneRect>,
    dwell_timer: DwellTimer,
    jump_detector: JumpDetector,
    zone_assigner: ZoneAssigner,
    aggregator: ZoneAggregator,
    metrics: PipelineMetrics,
}

impl ActivityPipeline {
    /// `threshold` must already be validated (>= 2) by `Config::validate`.
    pub fn new(zones: Vec<ZoneRect>, threshold: usize) -> Self {
        Self {
            zones,
            dwell_timer: DwellTimer::new(),
            jump_detector: JumpDetector::new(threshold),
            zone_assigner: ZoneAssigner::new(),
            aggregator: ZoneAggregator::new(),
            metrics: PipelineMetrics::new(),
        }
    }

    pub fn process_frame(
        &mut self,
        obs: &FrameObservation,
    ) -> Result<FrameResult, PipelineError> {
        // bboxes are not consumed here, but a length mismatch is the same
        // upstream wiring fault as any other and must not be masked.
        if obs.ids.len() != obs.bboxes.len() {
            return Err(PipelineError::MisalignedArrays {
                frame_id: obs.frame_id,
                field: "bboxes",
                ids: obs.ids.len(),
                other: obs.bboxes.len(),
            });
        }

        let dwell = self.dwell_timer.update(&obs.ids, obs.timestamp);

        let heights: Vec<f32> = obs.btm_midpoint.iter().map(|p| p[1]).collect();
        let jumps = self
            .jump_detector
            .update(&obs.ids, &heights, obs.frame_id)?;

        let assignments =
            self.zone_assigner
                .assign(&self.zones, &obs.ids, &obs.btm_midpoint, obs.frame_id)?;

        let zones = self.aggregator.combine(&obs.ids, &assignments, &jumps);

        let tracks = obs
            .ids
            .iter()
            .map(|id| {
                let jump = &jumps[id];
                TrackReport {
                    id: *id,
                    zone: assignments[id].label(),
                    jump_count: jump.jump_count,
                    direction: jump.direction,
                    height: jump.height,
                    dwell: format!("{}s", dwell[id]),
                }
            })
            .collect();

        self.metrics.record_frame(obs.ids.len());

        Ok(FrameResult {
            frame_id: obs.frame_id,
            timestamp: obs.timestamp,
            tracks,
            zones,
        })
    }

    /// Distinct ids ever seen by the dwell timer — the state-growth proxy.
    pub fn unique_tracks(&self) -> usize {
        self.dwell_timer.tracked_count()
    }

    pub fn summary(&self) -> MetricsSummary {
        self.metrics
            .summary(self.unique_tracks(), self.jump_detector.total_jumps())
    }
}
