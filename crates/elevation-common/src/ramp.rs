//! Display range and colour ramp break points.

use serde::{Deserialize, Serialize};

use crate::error::{ReliefError, ReliefResult};

/// Sea level, the fixed break between the water and lowland bands.
pub const SEA_LEVEL: i16 = 0;

/// Elevation clamp used to normalize samples for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightRange {
    pub min: i16,
    pub max: i16,
}

impl Default for HeightRange {
    fn default() -> Self {
        Self {
            min: -12000,
            max: 9000,
        }
    }
}

impl HeightRange {
    pub fn new(min: i16, max: i16) -> Self {
        Self { min, max }
    }

    /// Reject empty and inverted ranges; both make normalization undefined.
    pub fn validate(&self) -> ReliefResult<()> {
        if self.min >= self.max {
            return Err(ReliefError::configuration(format!(
                "height range min ({}) must be below max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// Width of the range as a float, for normalization.
    pub fn span(&self) -> f64 {
        f64::from(self.max) - f64::from(self.min)
    }
}

/// Configurable break points of the colour ramp.
///
/// Together with [`SEA_LEVEL`] and the display [`HeightRange`] they define
/// four bands: water, lowland (green), highland (brown), peak (grey).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRampConfig {
    pub green_limit: i16,
    pub brown_limit: i16,
}

impl Default for ColorRampConfig {
    fn default() -> Self {
        Self {
            green_limit: 2000,
            brown_limit: 4000,
        }
    }
}

impl ColorRampConfig {
    pub fn new(green_limit: i16, brown_limit: i16) -> Self {
        Self {
            green_limit,
            brown_limit,
        }
    }

    /// Check `min < 0 < green_limit < brown_limit < max`.
    ///
    /// Every band's normalization denominator is positive only under this
    /// ordering.
    pub fn validate(&self, range: &HeightRange) -> ReliefResult<()> {
        range.validate()?;
        let ordered = range.min < SEA_LEVEL
            && SEA_LEVEL < self.green_limit
            && self.green_limit < self.brown_limit
            && self.brown_limit < range.max;
        if !ordered {
            return Err(ReliefError::configuration(format!(
                "ramp limits must satisfy min < 0 < green < brown < max, got min={} green={} brown={} max={}",
                range.min, self.green_limit, self.brown_limit, range.max
            )));
        }
        Ok(())
    }
}
