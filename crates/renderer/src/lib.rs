//! Image rendering for elevation data.
//!
//! Implements:
//! - Grayscale and four-band colour ramp encoding
//! - Gradient relief overlay
//! - PNG output

pub mod encoder;
pub mod image;
pub mod png;
pub mod relief;

pub use encoder::{band_of, encode_color, encode_gray, to_color, to_gray, Band, Rgb};
pub use image::{display_row, PixelFormat, RenderedImage};
pub use relief::{apply_relief, ReliefGain};
