// src/dwell_timer.rs
//
// Dwell timing: how long each track has been on screen. The first sighting
// pins the track's reference instant; every later frame reports whole
// elapsed seconds against it. There is no reset or eviction — a track's
// first-seen instant lives as long as the process.

use std::collections::HashMap;

pub struct DwellTimer {
    first_seen: HashMap<u32, f64>,
}

impl DwellTimer {
    pub fn new() -> Self {
        Self {
            first_seen: HashMap::new(),
        }
    }

    /// Report elapsed whole seconds for every id in the current frame.
    /// `now` is the host clock in seconds and must be non-decreasing across
    /// frames — the host frame loop owns pacing.
    pub fn update(&mut self, ids: &[u32], now: f64) -> HashMap<u32, u64> {
        let mut out = HashMap::with_capacity(ids.len());
        for &id in ids {
            let first = *self.first_seen.entry(id).or_insert(now);
            out.insert(id, (now - first).floor() as u64);
        }
        out
    }

    pub fn tracked_count(&self) -> usize {
        self.first_seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_on_first_sighting() {
        let mut timer = DwellTimer::new();
        let out = timer.update(&[1], 100.0);
        assert_eq!(out[&1], 0);
    }

    #[test]
    fn test_elapsed_is_floored_seconds() {
        let mut timer = DwellTimer::new();
        timer.update(&[1], 10.0);
        assert_eq!(timer.update(&[1], 10.9)[&1], 0);
        assert_eq!(timer.update(&[1], 11.0)[&1], 1);
        assert_eq!(timer.update(&[1], 14.7)[&1], 4);
    }

    #[test]
    fn test_dwell_is_monotonic() {
        let mut timer = DwellTimer::new();
        let mut last = 0;
        for (i, t) in [5.0, 5.4, 6.1, 8.0, 12.3].iter().enumerate() {
            let dwell = timer.update(&[1], *t)[&1];
            assert!(dwell >= last, "dwell regressed at sample {}", i);
            last = dwell;
        }
        assert_eq!(last, 7); // floor(12.3 - 5.0)
    }

    #[test]
    fn test_each_track_keeps_its_own_start() {
        let mut timer = DwellTimer::new();
        timer.update(&[1], 0.0);
        timer.update(&[1, 2], 10.0);
        let out = timer.update(&[1, 2], 15.0);
        assert_eq!(out[&1], 15);
        assert_eq!(out[&2], 5);
        assert_eq!(timer.tracked_count(), 2);
    }

    #[test]
    fn test_reappearing_track_resumes_original_clock() {
        // No eviction: an id absent for many frames still dwells from its
        // original first sighting.
        let mut timer = DwellTimer::new();
        timer.update(&[9], 0.0);
        timer.update(&[], 50.0);
        assert_eq!(timer.update(&[9], 100.0)[&9], 100);
    }
}
