//! Typed contract errors for the per-frame pipeline.

use thiserror::Error;

/// Errors raised by the core components. Every variant is a contract
/// violation of either the upstream collaborator or the configuration;
/// none of them is recoverable mid-stream.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("frame {frame_id}: ids has {ids} entries but {field} has {other} — misaligned upstream arrays")]
    MisalignedArrays {
        frame_id: u64,
        field: &'static str,
        ids: usize,
        other: usize,
    },

    #[error("jump smoothing window must be at least 2, got {0}")]
    InvalidThreshold(usize),

    #[error("bbox filter enabled but no zones configured")]
    BboxFilterWithoutZones,
}
