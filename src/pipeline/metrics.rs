// src/pipeline/metrics.rs
//
// Stream-level observability: frame throughput plus the per-id state growth
// that this pipeline never evicts. Exported in the final report.

use std::time::Instant;

#[derive(Debug)]
pub struct PipelineMetrics {
    pub total_frames: u64,
    pub empty_frames: u64,
    pub started_at: Instant,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self {
            total_frames: 0,
            empty_frames: 0,
            started_at: Instant::now(),
        }
    }

    pub fn record_frame(&mut self, track_count: usize) {
        self.total_frames += 1;
        if track_count == 0 {
            self.empty_frames += 1;
        }
    }

    pub fn fps(&self) -> f64 {
        let elapsed = self.started_at.elapsed().as_secs_f64();
        if elapsed > 0.01 {
            self.total_frames as f64 / elapsed
        } else {
            0.0
        }
    }

    pub fn summary(&self, unique_tracks: usize, total_jumps: u64) -> MetricsSummary {
        MetricsSummary {
            total_frames: self.total_frames,
            empty_frames: self.empty_frames,
            unique_tracks,
            total_jumps,
            fps: self.fps(),
            elapsed_secs: self.started_at.elapsed().as_secs_f64(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub total_frames: u64,
    pub empty_frames: u64,
    /// Distinct ids ever seen — a proxy for resident per-id state, which
    /// grows for the process lifetime.
    pub unique_tracks: usize,
    pub total_jumps: u64,
    pub fps: f64,
    pub elapsed_secs: f64,
}
