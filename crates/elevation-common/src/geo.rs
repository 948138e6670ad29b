//! Geographic coordinates and integer grid addressing.
//!
//! The global grid is an equirectangular degree grid. Row 0 is the
//! southernmost row and column 0 the westernmost column, matching the natural
//! storage order of GEBCO-style datasets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A geographic position in degrees.
///
/// No bounds are enforced; callers keep `lat` in [-90, 90] and `lon` in
/// [-180, 180] for meaningful offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Coordinate under a pixel of a whole-world display image
    /// (top row = 90°N, left column = 180°W).
    pub fn from_display_pixel(x: f64, y: f64, width: usize, height: usize) -> Self {
        let lon = (x / width as f64) * 360.0 - 180.0;
        let lat = 90.0 - (y / height as f64) * 180.0;
        Self { lat, lon }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Integer (row, column) index into the global grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridOffset {
    pub row: usize,
    pub col: usize,
}

impl GridOffset {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Size of a grid or window in rows (height) and columns (width).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridExtent {
    pub rows: usize,
    pub cols: usize,
}

impl GridExtent {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of samples.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Check whether a window anchored at `offset` lies entirely inside this extent.
    pub fn contains_window(&self, offset: GridOffset, window: GridExtent) -> bool {
        let row_end = offset.row.checked_add(window.rows);
        let col_end = offset.col.checked_add(window.cols);
        matches!((row_end, col_end), (Some(r), Some(c)) if r <= self.rows && c <= self.cols)
    }
}

impl fmt::Display for GridExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Maps geographic coordinates to grid offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoOffsetConverter {
    steps_per_degree: f64,
    center: GridOffset,
}

impl GeoOffsetConverter {
    /// `center` is the offset of coordinate (0°, 0°).
    pub fn new(steps_per_degree: f64, center: GridOffset) -> Self {
        Self {
            steps_per_degree,
            center,
        }
    }

    /// Converter for a whole-world grid of the given extent:
    /// `cols / 360` steps per degree, (0°, 0°) at the grid centre.
    pub fn for_grid(extent: GridExtent) -> Self {
        Self::new(
            extent.cols as f64 / 360.0,
            GridOffset::new(extent.rows / 2, extent.cols / 2),
        )
    }

    pub fn steps_per_degree(&self) -> f64 {
        self.steps_per_degree
    }

    pub fn center(&self) -> GridOffset {
        self.center
    }

    /// Convert a coordinate to a grid offset.
    ///
    /// Fractional steps are truncated toward zero, not rounded. A result
    /// below zero saturates at 0.
    pub fn convert(&self, coord: GeoCoordinate) -> GridOffset {
        GridOffset {
            row: shift(self.center.row, coord.lat * self.steps_per_degree),
            col: shift(self.center.col, coord.lon * self.steps_per_degree),
        }
    }

    /// Approximate inverse of [`convert`](Self::convert).
    pub fn to_coordinate(&self, offset: GridOffset) -> GeoCoordinate {
        let lat = (offset.row as f64 - self.center.row as f64) / self.steps_per_degree;
        let lon = (offset.col as f64 - self.center.col as f64) / self.steps_per_degree;
        GeoCoordinate { lat, lon }
    }
}

fn shift(base: usize, steps: f64) -> usize {
    // `as i64` truncates toward zero, saturates at the i64 bounds and maps NaN to 0
    let target = (base as i64).saturating_add(steps as i64);
    target.max(0) as usize
}
