//! Whole-grid buffer kept in memory for the world overview.

use std::path::Path;

use elevation_common::{GridExtent, GridOffset, ReliefError, ReliefResult};
use tracing::{debug, info, warn};

use crate::window::WindowSource;

/// A complete grid of samples resident in memory.
///
/// Row-major, row 0 = southernmost row. Read-only once constructed.
#[derive(Debug, Clone)]
pub struct ResidentBuffer {
    extent: GridExtent,
    samples: Vec<i16>,
}

impl ResidentBuffer {
    pub fn from_samples(extent: GridExtent, samples: Vec<i16>) -> ReliefResult<Self> {
        if samples.len() != extent.len() {
            return Err(ReliefError::configuration(format!(
                "grid {} needs {} samples, got {}",
                extent,
                extent.len(),
                samples.len()
            )));
        }
        Ok(Self { extent, samples })
    }

    /// Grid of sea-level samples.
    pub fn zeroed(extent: GridExtent) -> Self {
        Self {
            extent,
            samples: vec![0; extent.len()],
        }
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Offset of the grid centre, the position of (0°, 0°) on a world grid.
    pub fn center(&self) -> GridOffset {
        GridOffset::new(self.extent.rows / 2, self.extent.cols / 2)
    }
}

impl WindowSource for ResidentBuffer {
    fn extent(&self) -> GridExtent {
        self.extent
    }

    fn read(&self, offset: GridOffset, extent: GridExtent) -> ReliefResult<Vec<i16>> {
        if !self.extent.contains_window(offset, extent) {
            return Err(ReliefError::range(offset, extent, self.extent));
        }

        let mut out = Vec::with_capacity(extent.len());
        for row in offset.row..offset.row + extent.rows {
            let start = row * self.extent.cols + offset.col;
            out.extend_from_slice(&self.samples[start..start + extent.cols]);
        }
        Ok(out)
    }
}

/// Load the overview raster: headerless, row-major, native-endian `i16`.
///
/// A missing or short file is not fatal. Whatever could not be read is left
/// at zero and a warning is logged, so the overview still renders (flat).
pub fn load_overview(path: &Path, extent: GridExtent) -> ResidentBuffer {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not open overview file, using empty grid");
            return ResidentBuffer::zeroed(extent);
        }
    };

    let expected = extent.len();
    let mut samples: Vec<i16> = bytes
        .chunks_exact(2)
        .take(expected)
        .map(|pair| i16::from_ne_bytes([pair[0], pair[1]]))
        .collect();

    if samples.len() < expected {
        warn!(
            path = %path.display(),
            read = samples.len(),
            expected,
            "Overview file is truncated, zero-filling the remainder"
        );
        samples.resize(expected, 0);
    } else if bytes.len() > expected * 2 {
        debug!(
            path = %path.display(),
            extra_bytes = bytes.len() - expected * 2,
            "Ignoring trailing bytes in overview file"
        );
    }

    info!(path = %path.display(), extent = %extent, "Loaded overview grid");
    ResidentBuffer { extent, samples }
}
