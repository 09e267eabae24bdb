use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_AFTER_LABEL, DEFAULT_BEFORE_LABEL, DEFAULT_BOUNDARY, DEFAULT_BRUSH_WIDTH_DIVISOR,
    DEFAULT_GRAB_WIDTH, DEFAULT_HANDLE_WIDTH, DEFAULT_JPEG_QUALITY, DEFAULT_MASK_COLOR,
    DEFAULT_MASK_OPACITY, DEFAULT_MIN_BRUSH_WIDTH,
};
use crate::encoding::ExportFormat;
use crate::error::{Result, ZenspaceError};

/// Top-level editor configuration. Every section falls back to its defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub brush: BrushConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub comparator: ComparatorConfig,
}

impl EditorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ZenspaceError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ZenspaceError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        let b = &self.brush;
        if !(b.min_width.is_finite() && b.min_width > 0.0) {
            return Err(ZenspaceError::Config(format!(
                "brush.min_width must be > 0 (got {})",
                b.min_width
            )));
        }
        if !(b.width_divisor.is_finite() && b.width_divisor > 0.0) {
            return Err(ZenspaceError::Config(format!(
                "brush.width_divisor must be > 0 (got {})",
                b.width_divisor
            )));
        }
        if !(0.0..=1.0).contains(&b.opacity) {
            return Err(ZenspaceError::Config(format!(
                "brush.opacity must be in [0, 1] (got {})",
                b.opacity
            )));
        }
        if !(1..=100).contains(&self.export.quality) {
            return Err(ZenspaceError::Config(format!(
                "export.quality must be in [1, 100] (got {})",
                self.export.quality
            )));
        }
        if !(0.0..=100.0).contains(&self.comparator.default_boundary) {
            return Err(ZenspaceError::Config(format!(
                "comparator.default_boundary must be in [0, 100] (got {})",
                self.comparator.default_boundary
            )));
        }
        Ok(())
    }
}

/// Mask brush styling. Width in surface pixels is
/// `max(min_width, surface_width / width_divisor)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrushConfig {
    #[serde(default = "default_min_width")]
    pub min_width: f32,
    #[serde(default = "default_width_divisor")]
    pub width_divisor: f32,
    /// Highlight colour, RGB.
    #[serde(default = "default_color")]
    pub color: [u8; 3],
    /// Highlight opacity in [0.0, 1.0].
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

fn default_min_width() -> f32 {
    DEFAULT_MIN_BRUSH_WIDTH
}
fn default_width_divisor() -> f32 {
    DEFAULT_BRUSH_WIDTH_DIVISOR
}
fn default_color() -> [u8; 3] {
    DEFAULT_MASK_COLOR
}
fn default_opacity() -> f32 {
    DEFAULT_MASK_OPACITY
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_BRUSH_WIDTH,
            width_divisor: DEFAULT_BRUSH_WIDTH_DIVISOR,
            color: DEFAULT_MASK_COLOR,
            opacity: DEFAULT_MASK_OPACITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ExportFormat,
    /// JPEG quality, 1-100. Ignored for PNG.
    #[serde(default = "default_quality")]
    pub quality: u8,
}

fn default_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparatorConfig {
    /// Boundary position on mount, percent of width.
    #[serde(default = "default_boundary")]
    pub default_boundary: f32,
    #[serde(default = "default_before_label")]
    pub before_label: String,
    #[serde(default = "default_after_label")]
    pub after_label: String,
    /// Visual handle width in display pixels.
    #[serde(default = "default_handle_width")]
    pub handle_width: f32,
    /// Grabbable width around the handle in display pixels.
    #[serde(default = "default_grab_width")]
    pub grab_width: f32,
}

fn default_boundary() -> f32 {
    DEFAULT_BOUNDARY
}
fn default_before_label() -> String {
    DEFAULT_BEFORE_LABEL.to_string()
}
fn default_after_label() -> String {
    DEFAULT_AFTER_LABEL.to_string()
}
fn default_handle_width() -> f32 {
    DEFAULT_HANDLE_WIDTH
}
fn default_grab_width() -> f32 {
    DEFAULT_GRAB_WIDTH
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            default_boundary: DEFAULT_BOUNDARY,
            before_label: default_before_label(),
            after_label: default_after_label(),
            handle_width: DEFAULT_HANDLE_WIDTH,
            grab_width: DEFAULT_GRAB_WIDTH,
        }
    }
}
