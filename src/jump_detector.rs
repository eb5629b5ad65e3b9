// src/jump_detector.rs
//
// Per-track vertical oscillation counting. Each track keeps a bounded
// window of its most recent bottom-midpoint heights; a direction flip is
// declared only when the last `threshold` heights move monotonically in
// one direction. A full jump is one ascend-then-descend excursion, so the
// counter increments exactly once per up→down flip.
//
// Image convention: y grows downward, so a uniformly increasing height run
// means the track is coming back down.

use crate::error::PipelineError;
use crate::types::Direction;
use std::collections::{HashMap, VecDeque};
use tracing::debug;

struct JumpTrack {
    direction: Direction,
    jump_count: u64,
    height_history: VecDeque<f32>,
}

/// Per-track jump state for one frame.
#[derive(Debug, Clone, Copy)]
pub struct JumpObservation {
    pub jump_count: u64,
    pub direction: Direction,
    /// Latest raw height sample, not smoothed.
    pub height: f32,
}

pub struct JumpDetector {
    threshold: usize,
    tracks: HashMap<u32, JumpTrack>,
}

impl JumpDetector {
    /// `threshold` is the smoothing window length. Values below 2 are a
    /// configuration error and are rejected by `Config::validate` before
    /// this constructor runs.
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            tracks: HashMap::new(),
        }
    }

    pub fn update(
        &mut self,
        ids: &[u32],
        heights: &[f32],
        frame_id: u64,
    ) -> Result<HashMap<u32, JumpObservation>, PipelineError> {
        if ids.len() != heights.len() {
            return Err(PipelineError::MisalignedArrays {
                frame_id,
                field: "heights",
                ids: ids.len(),
                other: heights.len(),
            });
        }

        let mut out = HashMap::with_capacity(ids.len());

        for (i, &id) in ids.iter().enumerate() {
            let height = heights[i];
            let track = self.tracks.entry(id).or_insert_with(|| JumpTrack {
                direction: Direction::Down,
                jump_count: 0,
                height_history: VecDeque::with_capacity(self.threshold),
            });

            if track.height_history.len() == self.threshold {
                track.height_history.pop_front();
            }
            track.height_history.push_back(height);

            if track.height_history.len() >= self.threshold {
                match window_trend(&track.height_history) {
                    Some(Trend::Descending) if track.direction == Direction::Up => {
                        track.direction = Direction::Down;
                        track.jump_count += 1;
                        debug!(
                            "Track {} landed at frame {} — jump #{}",
                            id, frame_id, track.jump_count
                        );
                    }
                    Some(Trend::Ascending) if track.direction == Direction::Down => {
                        track.direction = Direction::Up;
                        debug!("Track {} going up at frame {}", id, frame_id);
                    }
                    _ => {}
                }
            }

            out.insert(
                id,
                JumpObservation {
                    jump_count: track.jump_count,
                    direction: track.direction,
                    height,
                },
            );
        }

        Ok(out)
    }

    pub fn tracked_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn total_jumps(&self) -> u64 {
        self.tracks.values().map(|t| t.jump_count).sum()
    }
}

enum Trend {
    /// Heights uniformly increasing — moving toward the frame bottom.
    Descending,
    /// Heights uniformly decreasing — moving toward the frame top.
    Ascending,
}

/// Sign-uniformity test over the window's successive differences. A zero
/// difference has sign zero and breaks uniformity: a window mixing zeros
/// with one non-zero sign must not read as a reversal.
fn window_trend(window: &VecDeque<f32>) -> Option<Trend> {
    let mut signs = window
        .iter()
        .zip(window.iter().skip(1))
        .map(|(a, b)| match b.partial_cmp(a) {
            Some(std::cmp::Ordering::Greater) => 1i8,
            Some(std::cmp::Ordering::Less) => -1i8,
            _ => 0i8,
        });

    let first = signs.next()?;
    if first == 0 || signs.any(|s| s != first) {
        return None;
    }
    Some(if first > 0 {
        Trend::Descending
    } else {
        Trend::Ascending
    })
}
