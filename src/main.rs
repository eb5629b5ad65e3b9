// src/main.rs

mod bbox_filter;
mod config;
mod debug;
mod dwell_timer;
mod error;
mod jump_detector;
mod pipeline;
mod types;
mod zone_aggregator;
mod zone_assigner;

use anyhow::{Context, Result};
use bbox_filter::ZoneBboxFilter;
use pipeline::ActivityPipeline;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use tracing::{error, info, warn};
use types::{Config, FrameObservation};

fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());

    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path))?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "zone_activity_detection={}",
            config.logging.level
        ))
        .init();

    info!("🏃 Zone Activity Detection Starting");
    info!("✓ Configuration loaded from {}", config_path);
    info!(
        "  zones={}, jump window={}, bbox filter={}",
        config.zones.len(),
        config.jump.threshold,
        if config.bbox_filter.enabled { "on" } else { "off" }
    );

    let zones: Vec<_> = config.zones.iter().map(|z| z.to_rect()).collect();

    let bbox_filter = if config.bbox_filter.enabled {
        // Validated non-empty by Config::validate.
        Some(ZoneBboxFilter::new(&zones[0]))
    } else {
        None
    };

    let mut pipeline = ActivityPipeline::new(zones, config.jump.threshold);

    let input = File::open(&config.replay.input_path)
        .with_context(|| format!("cannot open {}", config.replay.input_path))?;
    let mut output = File::create(&config.replay.output_path)
        .with_context(|| format!("cannot create {}", config.replay.output_path))?;
    info!("💾 Results will be written to: {}", config.replay.output_path);

    let mut bboxes_dropped_total: usize = 0;

    for (line_no, line) in BufReader::new(input).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // A malformed or field-missing frame is a fatal upstream contract
        // violation — stop the stream rather than defaulting.
        let mut obs: FrameObservation = serde_json::from_str(&line)
            .with_context(|| format!("invalid frame observation at line {}", line_no + 1))?;

        if let Some(ref filter) = bbox_filter {
            bboxes_dropped_total += filter.apply(&mut obs);
        }

        let result = match pipeline.process_frame(&obs) {
            Ok(result) => result,
            Err(e) => {
                error!("Frame {} failed: {}", obs.frame_id, e);
                return Err(e.into());
            }
        };

        if config.debug.dump_frames {
            debug::dump_frame(&obs, &result);
        }

        writeln!(output, "{}", serde_json::to_string(&result)?)?;

        if (line_no + 1) % 50 == 0 {
            info!(
                "Progress: frame {} | tracks on screen: {} | unique ids: {}",
                result.frame_id,
                result.track_count(),
                pipeline.unique_tracks()
            );
        }
    }
    output.flush()?;

    let summary = pipeline.summary();
    info!("\n📊 Final Report:");
    info!("  Total frames: {}", summary.total_frames);
    info!("  Empty frames: {}", summary.empty_frames);
    info!("  Unique tracks: {}", summary.unique_tracks);
    info!("  Total jumps: {}", summary.total_jumps);
    if bbox_filter.is_some() {
        info!("  Bbox filter: {} boxes dropped", bboxes_dropped_total);
    }
    info!("  Processing Speed: {:.1} FPS", summary.fps);

    if summary.unique_tracks > 10_000 {
        warn!(
            "⚠️  {} distinct ids retained in memory — per-id state is never \
             evicted; long-running streams should be restarted periodically",
            summary.unique_tracks
        );
    }

    Ok(())
}
