//! Per-call render parameters.

use serde::{Deserialize, Serialize};

use crate::error::ReliefResult;
use crate::geo::GeoCoordinate;
use crate::ramp::{ColorRampConfig, HeightRange};

/// Which pipeline produces the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Whole world from the resident low-resolution buffer.
    #[default]
    Overview,
    /// High-resolution window read from the dataset.
    Area,
}

/// Pixel encoding of the output image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Gray,
    Color,
}

/// Immutable description of one render.
///
/// Built fresh for every parameter change; nothing is shared between renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub center: GeoCoordinate,
    pub mode: RenderMode,
    pub color: ColorMode,
    pub edges: bool,
    pub heights: HeightRange,
    pub ramp: ColorRampConfig,
}

impl RenderRequest {
    /// Overview, grayscale, no relief, default ranges.
    pub fn new(center: GeoCoordinate) -> Self {
        Self {
            center,
            mode: RenderMode::default(),
            color: ColorMode::default(),
            edges: false,
            heights: HeightRange::default(),
            ramp: ColorRampConfig::default(),
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    pub fn with_edges(mut self, edges: bool) -> Self {
        self.edges = edges;
        self
    }

    pub fn with_heights(mut self, heights: HeightRange) -> Self {
        self.heights = heights;
        self
    }

    pub fn with_ramp(mut self, ramp: ColorRampConfig) -> Self {
        self.ramp = ramp;
        self
    }

    /// Ramp limits only matter (and are only checked) in colour mode.
    pub fn validate(&self) -> ReliefResult<()> {
        match self.color {
            ColorMode::Gray => self.heights.validate(),
            ColorMode::Color => self.ramp.validate(&self.heights),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let req = RenderRequest::new(GeoCoordinate::new(47.162, 19.503))
            .with_mode(RenderMode::Area)
            .with_color(ColorMode::Color)
            .with_edges(true);
        assert_eq!(req.mode, RenderMode::Area);
        assert_eq!(req.color, ColorMode::Color);
        assert!(req.edges);
        assert_eq!(req.heights, HeightRange::new(-12000, 9000));
        assert_eq!(req.ramp, ColorRampConfig::new(2000, 4000));
    }

    #[test]
    fn test_gray_ignores_ramp_limits() {
        let req = RenderRequest::new(GeoCoordinate::new(0.0, 0.0))
            .with_ramp(ColorRampConfig::new(5000, 100));
        assert!(req.validate().is_ok());
        assert!(req.with_color(ColorMode::Color).validate().is_err());
    }
}
