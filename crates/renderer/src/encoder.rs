//! Elevation to pixel encoding: grayscale and the four-band colour ramp.

use elevation_common::{ColorRampConfig, HeightRange, ReliefResult, SEA_LEVEL};
use grid_processor::SampleWindow;
use tracing::debug;

use crate::image::{PixelFormat, RenderedImage};

/// Colour value in RGB format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Equal channels.
    pub fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// Colour ramp band of an elevation sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// Below sea level: blue
    Water,
    /// Sea level up to the green limit: green
    Lowland,
    /// Green limit up to the brown limit: brown
    Highland,
    /// Brown limit and above: grey
    Peak,
}

/// Select the ramp band of `sample`. Bands are tested in ascending order.
pub fn band_of(sample: i16, ramp: &ColorRampConfig) -> Band {
    match sample {
        s if s < SEA_LEVEL => Band::Water,
        s if s < ramp.green_limit => Band::Lowland,
        s if s < ramp.brown_limit => Band::Highland,
        _ => Band::Peak,
    }
}

/// Scale a fraction to a channel value, clamping to [0, 1] first.
#[inline]
fn intensity(t: f64) -> u8 {
    (t.clamp(0.0, 1.0) * 255.0) as u8
}

/// Map `sample` linearly from `range` onto 0..=255, rounding to nearest.
///
/// `range` must be validated (`min < max`).
#[inline]
pub fn to_gray(sample: i16, range: &HeightRange) -> u8 {
    let t = (f64::from(sample) - f64::from(range.min)) / range.span();
    let t = t.clamp(0.0, 1.0);
    (0.5 + t * 255.0) as u8
}

/// Map `sample` through the four-band colour ramp.
///
/// - water: `(0, 0, v)`, v over `[min, 0)`
/// - lowland: `(0, v, 0)`, v remapped to 0.5..1.0 over `[0, green)`
/// - highland: `(v, v/4, v/4)`, v remapped to 0.2..0.7 over `[green, brown)`
/// - peak: `(v, v, v)`, v remapped to 0.5..1.0 over `[brown, max]`
///
/// `ramp` must be validated against `range`.
pub fn to_color(sample: i16, range: &HeightRange, ramp: &ColorRampConfig) -> Rgb {
    let s = f64::from(sample);
    let sea = f64::from(SEA_LEVEL);
    let green = f64::from(ramp.green_limit);
    let brown = f64::from(ramp.brown_limit);

    match band_of(sample, ramp) {
        Band::Water => {
            let min = f64::from(range.min);
            let t = (s - min) / (sea - min);
            Rgb::new(0, 0, intensity(t))
        }
        Band::Lowland => {
            let t = (s - sea) / (green - sea);
            Rgb::new(0, intensity(0.5 + 0.5 * t), 0)
        }
        Band::Highland => {
            let t = (s - green) / (brown - green);
            let v = intensity(0.2 + 0.5 * t);
            Rgb::new(v, v / 4, v / 4)
        }
        Band::Peak => {
            let t = (s - brown) / (f64::from(range.max) - brown);
            Rgb::gray(intensity(0.5 + 0.5 * t))
        }
    }
}

/// Encode a window as a grayscale image (north up).
pub fn encode_gray(window: &SampleWindow, range: &HeightRange) -> ReliefResult<RenderedImage> {
    range.validate()?;

    let mut image = RenderedImage::new(window.width(), window.height(), PixelFormat::Gray8);
    for (raw_row, samples) in window.rows().enumerate() {
        let start = image.raw_index(raw_row, 0);
        let dst = &mut image.pixels_mut()[start..start + samples.len()];
        for (px, &sample) in dst.iter_mut().zip(samples) {
            *px = to_gray(sample, range);
        }
    }

    debug!(width = window.width(), height = window.height(), "Encoded grayscale window");
    Ok(image)
}

/// Encode a window through the colour ramp as an RGB image (north up).
pub fn encode_color(
    window: &SampleWindow,
    range: &HeightRange,
    ramp: &ColorRampConfig,
) -> ReliefResult<RenderedImage> {
    ramp.validate(range)?;

    let mut image = RenderedImage::new(window.width(), window.height(), PixelFormat::Rgb8);
    for (raw_row, samples) in window.rows().enumerate() {
        let start = image.raw_index(raw_row, 0);
        let dst = &mut image.pixels_mut()[start..start + samples.len() * 3];
        for (px, &sample) in dst.chunks_exact_mut(3).zip(samples) {
            let color = to_color(sample, range, ramp);
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
    }

    debug!(width = window.width(), height = window.height(), "Encoded colour window");
    Ok(image)
}
