// src/debug.rs
//
// Frame-level debugging dump, enabled via `debug.dump_frames`. Logs the raw
// observation next to the derived attributes so upstream wiring problems
// can be spotted without attaching a debugger.

use crate::pipeline::FrameResult;
use crate::types::FrameObservation;
use tracing::info;

pub fn dump_frame(obs: &FrameObservation, result: &FrameResult) {
    info!("-- debug frame {} --", obs.frame_id);
    info!("ids={:?}", obs.ids);
    info!("num bboxes={}", obs.bboxes.len());
    for (i, track) in result.tracks.iter().enumerate() {
        info!(
            "track {}: id={}, zone={}, jumps={}, dir={}, height={:.1}, dwell={}",
            i,
            track.id,
            track.zone,
            track.jump_count,
            track.direction.as_str(),
            track.height,
            track.dwell
        );
        info!(
            "  bbox={:?}, btm_midpoint={:?}",
            obs.bboxes[i], obs.btm_midpoint[i]
        );
    }
}
