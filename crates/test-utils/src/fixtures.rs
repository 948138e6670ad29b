//! Common test fixtures for relief-viewer tests.

use std::path::{Path, PathBuf};

use crate::generators::samples_to_bytes;

/// Named geographic positions as `(lat, lon)`.
pub mod places {
    /// Central Hungary, the viewer's default start position
    pub const HUNGARY: (f64, f64) = (47.162, 19.503);

    /// Null Island
    pub const ORIGIN: (f64, f64) = (0.0, 0.0);

    /// Mount Everest
    pub const EVEREST: (f64, f64) = (27.988, 86.925);

    /// Challenger Deep
    pub const CHALLENGER_DEEP: (f64, f64) = (11.35, 142.2);
}

/// Grid sizes used by real deployments, as `(rows, cols)`.
pub mod grids {
    /// GEBCO 2023, 15 arc-second global grid
    pub const GEBCO_2023: (usize, usize) = (43200, 86400);

    /// 10 arc-minute world overview
    pub const OVERVIEW: (usize, usize) = (1080, 2160);

    /// Default area viewport
    pub const AREA_VIEWPORT: (usize, usize) = (1080, 1920);
}

/// Default display and ramp values.
pub mod heights {
    pub const MIN: i16 = -12000;
    pub const MAX: i16 = 9000;
    pub const GREEN_LIMIT: i16 = 2000;
    pub const BROWN_LIMIT: i16 = 4000;
}

/// Write `samples` as a raw native-endian grid file into `dir`.
pub fn write_raw_grid(dir: &Path, name: &str, samples: &[i16]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, samples_to_bytes(samples)).expect("Failed to write raw grid fixture");
    path
}
