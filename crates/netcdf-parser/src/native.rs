//! Native NetCDF reading using the netcdf library.
//!
//! GEBCO-style files declare a `lon` and a `lat` dimension and store
//! elevation as `elevation(lat, lon)` 16-bit integers, southernmost row
//! first. Windows are read straight from the file with hyperslab extents,
//! so only the requested rows and columns are decoded.

use std::path::{Path, PathBuf};
use std::sync::Once;

use elevation_common::{DatasetError, GridExtent, GridOffset};
use grid_processor::{DatasetOpener, ElevationDataset, VariableId};
use tracing::{debug, info};

use crate::error::{NetCdfError, NetCdfResult};

const LAT_NAMES: [&str; 3] = ["lat", "latitude", "y"];
const LON_NAMES: [&str; 3] = ["lon", "longitude", "x"];

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints verbose diagnostics even when errors are
/// handled on the Rust side. Call once before any NetCDF operation; repeated
/// calls are no-ops.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and we're passing null pointers
        // to disable error output, which is a documented valid use.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// Open a NetCDF file, mapping failures to [`NetCdfError::Io`].
pub(crate) fn open_file(path: &Path) -> NetCdfResult<netcdf::File> {
    silence_hdf5_errors();
    netcdf::open(path).map_err(|e| NetCdfError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// A NetCDF elevation file opened for windowed reads.
pub struct NetCdfDataset {
    path: PathBuf,
    file: netcdf::File,
    extent: GridExtent,
    variables: Vec<String>,
}

impl NetCdfDataset {
    /// Open `path` and determine the grid size.
    pub fn open(path: &Path) -> NetCdfResult<Self> {
        let file = open_file(path)?;
        let extent = grid_extent(&file)?;
        let variables = file.variables().map(|v| v.name()).collect();

        info!(
            path = %path.display(),
            rows = extent.rows,
            cols = extent.cols,
            "Opened NetCDF dataset"
        );

        Ok(Self {
            path: path.to_path_buf(),
            file,
            extent,
            variables,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_hyperslab(
        &self,
        variable: VariableId,
        offset: GridOffset,
        extent: GridExtent,
    ) -> NetCdfResult<Vec<i16>> {
        let name = self
            .variables
            .get(variable.0)
            .ok_or_else(|| NetCdfError::InvalidFormat(format!("no variable with id {}", variable.0)))?;
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| NetCdfError::MissingData(name.clone()))?;

        let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
        if shape != [self.extent.rows, self.extent.cols] {
            return Err(NetCdfError::InvalidFormat(format!(
                "variable '{}' has shape {:?}, expected [{}, {}]",
                name, shape, self.extent.rows, self.extent.cols
            )));
        }

        let rows = offset.row..offset.row + extent.rows;
        let cols = offset.col..offset.col + extent.cols;
        var.get_values::<i16, _>((rows, cols))
            .map_err(|e| NetCdfError::InvalidFormat(format!("failed to read '{}': {}", name, e)))
    }
}

impl ElevationDataset for NetCdfDataset {
    fn extent(&self) -> GridExtent {
        self.extent
    }

    fn variable_id(&self, name: &str) -> Result<VariableId, DatasetError> {
        self.variables
            .iter()
            .position(|v| v == name)
            .map(VariableId)
            .ok_or_else(|| NetCdfError::MissingData(name.to_string()).into())
    }

    fn read_window(
        &self,
        variable: VariableId,
        offset: GridOffset,
        extent: GridExtent,
        out: &mut [i16],
    ) -> Result<(), DatasetError> {
        if !self.extent.contains_window(offset, extent) {
            return Err(DatasetError::read(format!(
                "window {} at {} outside {}",
                extent, offset, self.extent
            )));
        }
        if out.len() != extent.len() {
            return Err(DatasetError::read(format!(
                "output buffer holds {} samples, window needs {}",
                out.len(),
                extent.len()
            )));
        }

        let values = self.read_hyperslab(variable, offset, extent)?;
        if values.len() != out.len() {
            return Err(DatasetError::read(format!(
                "library returned {} samples, expected {}",
                values.len(),
                out.len()
            )));
        }
        out.copy_from_slice(&values);

        debug!(offset = %offset, extent = %extent, "Read NetCDF hyperslab");
        Ok(())
    }
}

/// Grid size from the latitude/longitude dimensions.
///
/// Falls back to declaration order when the names are not recognised: the
/// first dimension counts columns, the second rows.
fn grid_extent(file: &netcdf::File) -> NetCdfResult<GridExtent> {
    let find = |names: &[&str]| names.iter().find_map(|n| file.dimension(n)).map(|d| d.len());

    if let (Some(rows), Some(cols)) = (find(&LAT_NAMES), find(&LON_NAMES)) {
        return Ok(GridExtent::new(rows, cols));
    }

    let dims: Vec<usize> = file.dimensions().map(|d| d.len()).collect();
    match dims.as_slice() {
        [cols, rows, ..] => Ok(GridExtent::new(*rows, *cols)),
        _ => Err(NetCdfError::InvalidFormat(format!(
            "expected at least 2 dimensions, found {}",
            dims.len()
        ))),
    }
}

/// Opens a [`NetCdfDataset`] on first use.
#[derive(Debug, Clone)]
pub struct NetCdfOpener {
    pub path: PathBuf,
}

impl NetCdfOpener {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetOpener for NetCdfOpener {
    fn open(&self) -> Result<Box<dyn ElevationDataset>, DatasetError> {
        Ok(Box::new(NetCdfDataset::open(&self.path)?))
    }

    fn describe(&self) -> String {
        format!("netcdf:{}", self.path.display())
    }
}
