//! Rectangular sample windows and their extraction.

use elevation_common::{GridExtent, GridOffset, ReliefError, ReliefResult};
use tracing::debug;

/// A rectangular block of elevation samples cut from the global grid.
///
/// Row-major, row 0 is the southernmost row of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow {
    south_west: GridOffset,
    extent: GridExtent,
    samples: Vec<i16>,
}

impl SampleWindow {
    /// Wrap a sample buffer; its length must equal `extent.len()`.
    pub fn new(south_west: GridOffset, extent: GridExtent, samples: Vec<i16>) -> ReliefResult<Self> {
        if samples.len() != extent.len() {
            return Err(ReliefError::configuration(format!(
                "window {} needs {} samples, got {}",
                extent,
                extent.len(),
                samples.len()
            )));
        }
        Ok(Self {
            south_west,
            extent,
            samples,
        })
    }

    pub fn south_west(&self) -> GridOffset {
        self.south_west
    }

    pub fn extent(&self) -> GridExtent {
        self.extent
    }

    pub fn width(&self) -> usize {
        self.extent.cols
    }

    pub fn height(&self) -> usize {
        self.extent.rows
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Sample at window-local (row, col).
    ///
    /// # Panics
    /// If the position lies outside the window.
    #[inline]
    pub fn sample(&self, row: usize, col: usize) -> i16 {
        self.samples[row * self.extent.cols + col]
    }

    /// One row of samples, west to east.
    pub fn row(&self, row: usize) -> &[i16] {
        let start = row * self.extent.cols;
        &self.samples[start..start + self.extent.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i16]> {
        // chunks_exact(0) panics; an empty window has no rows anyway
        self.samples.chunks_exact(self.extent.cols.max(1))
    }

    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }
}

/// Anything that can hand out a rectangular window of samples.
pub trait WindowSource {
    /// Full extent of the backing grid.
    fn extent(&self) -> GridExtent;

    /// Read `extent` samples anchored at the south-west corner `offset`,
    /// row-major, south to north.
    fn read(&self, offset: GridOffset, extent: GridExtent) -> ReliefResult<Vec<i16>>;
}

/// South-west corner of a `width` x `height` window centred on `center`.
///
/// `center - size / 2` on both axes with integer division. Fails with a
/// range error instead of wrapping when the corner would be negative.
pub fn south_west_corner(center: GridOffset, width: usize, height: usize) -> ReliefResult<GridOffset> {
    let extent = GridExtent::new(height, width);
    let row = center.row.checked_sub(height / 2);
    let col = center.col.checked_sub(width / 2);
    match (row, col) {
        (Some(row), Some(col)) => Ok(GridOffset::new(row, col)),
        _ => Err(ReliefError::Range {
            requested: format!("{} centred at {}", extent, center),
            bounds: "south-west corner below grid origin".to_string(),
        }),
    }
}

/// Extract a `width` x `height` window centred on `center` from `source`.
pub fn extract_window(
    source: &dyn WindowSource,
    center: GridOffset,
    width: usize,
    height: usize,
) -> ReliefResult<SampleWindow> {
    let south_west = south_west_corner(center, width, height)?;
    let extent = GridExtent::new(height, width);

    debug!(
        center = %center,
        south_west = %south_west,
        extent = %extent,
        "Extracting sample window"
    );

    let samples = source.read(south_west, extent)?;
    SampleWindow::new(south_west, extent, samples)
}
