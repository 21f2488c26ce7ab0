//! YAML configuration covering animation timing and rendering.
//!
//! Every field has a default, so a file only needs the keys it changes:
//!
//! ```yaml
//! animation:
//!   reveal_interval_frames: 60
//! render:
//!   palette:
//!     track: [255, 200, 0]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{AnimationConfig, RenderConfig, RevealResult};

/// Complete configuration of a run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Timing and geometry of the animation
    pub animation: AnimationConfig,
    /// Canvas and colours
    pub render: RenderConfig,
}

impl RevealConfig {
    /// Parses and validates a YAML document
    pub fn from_yaml_str(yaml: &str) -> RevealResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file
    pub fn load(path: &Path) -> RevealResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_yaml_str(&yaml)
    }

    /// Serializes to YAML
    pub fn to_yaml(&self) -> RevealResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Validates both sections
    pub fn validate(&self) -> RevealResult<()> {
        self.animation.validate()?;
        self.render.validate()
    }
}
