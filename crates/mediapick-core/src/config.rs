//! Flow configuration.
//!
//! A [`FlowConfig`] is built once, before the flow starts, and handed to the
//! orchestrator by value. Nothing mutates it afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

const DEFAULT_ALBUM_NAME: &str = "MediaPick";

/// Rational aspect ratio for the crop step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const SQUARE: AspectRatio = AspectRatio {
        width: 1,
        height: 1,
    };

    pub fn new(width: u32, height: u32) -> anyhow::Result<Self> {
        if width == 0 || height == 0 {
            anyhow::bail!("aspect ratio sides must be non-zero, got {width}:{height}");
        }
        Ok(Self { width, height })
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Whether and how the crop step runs for single-photo selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CropMode {
    None,
    Rectangle(AspectRatio),
}

/// Read-only configuration for one selection flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub shows_filters: bool,
    pub crop_mode: CropMode,
    pub should_save_new_pictures_to_album: bool,
    pub album_name: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            shows_filters: true,
            crop_mode: CropMode::None,
            should_save_new_pictures_to_album: false,
            album_name: DEFAULT_ALBUM_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_rejects_zero_sides() {
        assert!(AspectRatio::new(0, 1).is_err());
        assert!(AspectRatio::new(1, 0).is_err());
        assert!(AspectRatio::new(16, 9).is_ok());
    }

    #[test]
    fn test_aspect_ratio_value() {
        let ratio = AspectRatio::new(16, 9).unwrap();
        assert!((ratio.ratio() - 16.0 / 9.0).abs() < f64::EPSILON);
        assert_eq!(ratio.to_string(), "16:9");
    }

    #[test]
    fn test_default_config() {
        let config = FlowConfig::default();
        assert!(config.shows_filters);
        assert_eq!(config.crop_mode, CropMode::None);
        assert!(!config.should_save_new_pictures_to_album);
        assert_eq!(config.album_name, DEFAULT_ALBUM_NAME);
    }
}
