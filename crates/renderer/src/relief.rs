//! Gradient-based relief shading on top of an encoded image.
//!
//! Each interior pixel is brightened in proportion to the steepest
//! neighbouring elevation step:
//!
//! ```text
//! dx    = |raw[y][x+1] - raw[y][x]|
//! dy    = |raw[y+1][x] - raw[y][x]|
//! pixel = clamp(pixel + max(dx, dy) * gain, 0, 255)
//! ```
//!
//! Only the first channel is touched: the grey value of a grayscale image,
//! the red channel of a colour image.

use elevation_common::{ReliefError, ReliefResult};
use grid_processor::SampleWindow;
use tracing::debug;

use crate::image::{PixelFormat, RenderedImage};

/// Empirical brightening gains.
pub struct ReliefGain;

impl ReliefGain {
    pub const GRAY: f64 = 3.0;
    pub const COLOR: f64 = 10.0;

    /// Default gain for an image format.
    pub fn for_format(format: PixelFormat) -> f64 {
        match format {
            PixelFormat::Gray8 => Self::GRAY,
            PixelFormat::Rgb8 => Self::COLOR,
        }
    }
}

/// Steepest step from raw sample (`row`, `col`) to its east and north
/// neighbours.
#[inline]
pub fn gradient(window: &SampleWindow, row: usize, col: usize) -> i32 {
    let here = i32::from(window.sample(row, col));
    let dx = (i32::from(window.sample(row, col + 1)) - here).abs();
    let dy = (i32::from(window.sample(row + 1, col)) - here).abs();
    dx.max(dy)
}

/// Brighten `image` in place using the gradients of `window`, the window the
/// image was encoded from. The one-pixel border is left unchanged.
pub fn apply_relief(image: &mut RenderedImage, window: &SampleWindow, gain: f64) -> ReliefResult<()> {
    if image.width() != window.width() || image.height() != window.height() {
        return Err(ReliefError::configuration(format!(
            "relief window {} does not match image {}x{}",
            window.extent(),
            image.width(),
            image.height()
        )));
    }

    let (w, h) = (window.width(), window.height());
    if w < 3 || h < 3 {
        return Ok(());
    }

    let bpp = image.format().bytes_per_pixel();
    for y in 1..h - 1 {
        let row_start = image.raw_index(y, 0);
        for x in 1..w - 1 {
            let delta = gradient(window, y, x);
            if delta == 0 {
                continue;
            }
            let idx = row_start + x * bpp;
            let px = &mut image.pixels_mut()[idx];
            let boosted = i32::from(*px) + (f64::from(delta) * gain) as i32;
            *px = boosted.clamp(0, 255) as u8;
        }
    }

    debug!(width = w, height = h, gain, "Applied relief overlay");
    Ok(())
}
