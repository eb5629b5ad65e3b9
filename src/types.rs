use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub zones: Vec<ZonePolygon>,
    pub jump: JumpConfig,
    #[serde(default)]
    pub bbox_filter: BboxFilterConfig,
    pub replay: ReplayConfig,
    #[serde(default)]
    pub debug: DebugConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JumpConfig {
    /// Smoothing window length for the direction-reversal test.
    /// Must be >= 2; validated at startup, not at first frame.
    pub threshold: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BboxFilterConfig {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    pub input_path: String,
    pub output_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Dump every frame's raw observation and derived attributes to the log.
    #[serde(default)]
    pub dump_frames: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// A zone as configured: four corner points. Only points[0] and points[2]
/// are used, interpreted as opposite corners of an axis-aligned rectangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZonePolygon {
    pub points: [[f32; 2]; 4],
}

impl ZonePolygon {
    pub fn to_rect(&self) -> ZoneRect {
        ZoneRect {
            x1: self.points[0][0],
            y1: self.points[0][1],
            x2: self.points[2][0],
            y2: self.points[2][1],
        }
    }
}

/// Rectangle derived from a zone polygon's opposite corners.
#[derive(Debug, Clone, Copy)]
pub struct ZoneRect {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl ZoneRect {
    /// Strict containment — points on the boundary belong to no zone.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.x1 < x && x < self.x2 && self.y1 < y && y < self.y2
    }
}

/// One frame of upstream detection/tracking output. `ids`, `bboxes` and
/// `btm_midpoint` are parallel arrays aligned by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameObservation {
    pub frame_id: u64,
    /// Host clock, seconds. Drives dwell timing.
    pub timestamp: f64,
    pub ids: Vec<u32>,
    pub bboxes: Vec<[f32; 4]>,
    pub btm_midpoint: Vec<[f32; 2]>,
}

/// Vertical travel direction under the image convention (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

pub const NOT_IN_ZONE: &str = "not in zone";

/// A track's sticky zone assignment: either a zone index or the
/// "not in zone" sentinel.
///
/// The total order is the lexicographic order of the keys' string forms
/// (`"0"`, `"1"`, `"10"`, `"2"`, ..., `"not in zone"`). Integer indices and
/// the sentinel share one key space, and downstream output stability depends
/// on exactly this interleaving, so the order is defined here explicitly
/// instead of leaning on whatever map the aggregator happens to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKey {
    Zone(usize),
    NotInZone,
}

impl ZoneKey {
    /// Key form used for aggregation ordering: the bare index or the sentinel.
    pub fn key_str(&self) -> String {
        match self {
            Self::Zone(i) => i.to_string(),
            Self::NotInZone => NOT_IN_ZONE.to_string(),
        }
    }

    /// Per-track display label.
    pub fn label(&self) -> String {
        match self {
            Self::Zone(i) => format!("zone:{}", i),
            Self::NotInZone => NOT_IN_ZONE.to_string(),
        }
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key_str())
    }
}

impl Ord for ZoneKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_str().cmp(&other.key_str())
    }
}

impl PartialOrd for ZoneKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for ZoneKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.key_str())
    }
}

/// Per-track output for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct TrackReport {
    pub id: u32,
    pub zone: String,
    pub jump_count: u64,
    pub direction: Direction,
    pub height: f32,
    pub dwell: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_containment() {
        let zone = ZonePolygon {
            points: [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
        };
        let rect = zone.to_rect();
        assert!(rect.contains(5.0, 5.0));
        assert!(!rect.contains(10.0, 5.0), "boundary point matches no zone");
        assert!(!rect.contains(0.0, 5.0));
        assert!(!rect.contains(5.0, 0.0));
    }

    #[test]
    fn test_zone_key_string_order() {
        // Mixed integer/sentinel key space sorts by string form, so "10"
        // comes before "2" and the sentinel sorts after digit keys.
        let mut keys = vec![
            ZoneKey::Zone(2),
            ZoneKey::NotInZone,
            ZoneKey::Zone(10),
            ZoneKey::Zone(0),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                ZoneKey::Zone(0),
                ZoneKey::Zone(10),
                ZoneKey::Zone(2),
                ZoneKey::NotInZone,
            ]
        );
    }

    #[test]
    fn test_zone_key_labels() {
        assert_eq!(ZoneKey::Zone(3).label(), "zone:3");
        assert_eq!(ZoneKey::NotInZone.label(), "not in zone");
        assert_eq!(ZoneKey::Zone(3).key_str(), "3");
    }
}
