use crate::error::PipelineError;
use crate::types::Config;
use anyhow::Result;
use std::fs;

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Startup-time validation. A degenerate smoothing window is a
    /// configuration error and must never reach the first frame.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.jump.threshold < 2 {
            return Err(PipelineError::InvalidThreshold(self.jump.threshold));
        }
        if self.bbox_filter.enabled && self.zones.is_empty() {
            return Err(PipelineError::BboxFilterWithoutZones);
        }
        Ok(())
    }
}
