//! Test data generators for creating synthetic elevation grids.
//!
//! All generators return row-major `Vec<i16>` with row 0 as the southernmost
//! row, the storage order of the real datasets.

/// Creates a grid whose values encode their position: `row * 100 + col`.
///
/// Makes it easy to verify that a window came from the right place.
/// Values overflow `i16` past row 327, keep test grids small.
///
/// # Example
///
/// ```
/// use test_utils::create_offset_grid;
///
/// let grid = create_offset_grid(10, 5);
/// assert_eq!(grid.len(), 50);
/// assert_eq!(grid[0], 0);     // row 0, col 0
/// assert_eq!(grid[1], 1);     // row 0, col 1
/// assert_eq!(grid[10], 100);  // row 1, col 0
/// ```
pub fn create_offset_grid(width: usize, height: usize) -> Vec<i16> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((row * 100 + col) as i16);
        }
    }
    data
}

/// Creates a grid with every sample at `elevation`.
pub fn create_flat_grid(width: usize, height: usize, elevation: i16) -> Vec<i16> {
    vec![elevation; width * height]
}

/// Creates a west-to-east slope rising `step` metres per column from `base`.
pub fn create_slope_grid(width: usize, height: usize, base: i16, step: i16) -> Vec<i16> {
    let mut data = Vec::with_capacity(width * height);
    for _ in 0..height {
        for col in 0..width {
            data.push(base.saturating_add(step.saturating_mul(col as i16)));
        }
    }
    data
}

/// Creates sea floor at `depth` with a single north-south ridge of `peak`
/// metres along column `width / 2`.
pub fn create_ridge_grid(width: usize, height: usize, depth: i16, peak: i16) -> Vec<i16> {
    let ridge = width / 2;
    let mut data = Vec::with_capacity(width * height);
    for _ in 0..height {
        for col in 0..width {
            data.push(if col == ridge { peak } else { depth });
        }
    }
    data
}

/// Creates a small synthetic "world": ocean in the south half rising from
/// `-4000` m to the coast, land in the north half climbing to `5000` m.
pub fn create_world_grid(width: usize, height: usize) -> Vec<i16> {
    let mut data = Vec::with_capacity(width * height);
    let half = (height / 2).max(1) as f64;
    for row in 0..height {
        let t = row as f64 / half;
        let elevation = if row < height / 2 {
            -4000.0 * (1.0 - t)
        } else {
            5000.0 * (t - 1.0)
        };
        for _ in 0..width {
            data.push(elevation as i16);
        }
    }
    data
}

/// Encodes samples the way raw grid files store them (native-endian).
pub fn samples_to_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_ne_bytes()).collect()
}
