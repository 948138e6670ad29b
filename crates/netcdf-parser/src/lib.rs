//! NetCDF adapter for global elevation grids (GEBCO and similar).
//!
//! Exposes a NetCDF file as a [`grid_processor::ElevationDataset`] so the
//! renderer can pull windows out of multi-gigabyte grids without loading
//! them, plus a small inspection helper for looking at unknown files.
//!
//! # System requirements
//!
//! Links against libnetcdf and HDF5 (`libnetcdf-dev libhdf5-dev`).

pub mod error;
pub mod inspect;
pub mod native;

pub use error::{NetCdfError, NetCdfResult};
pub use inspect::{inspect, DatasetInfo, DimensionInfo, VariableInfo};
pub use native::{silence_hdf5_errors, NetCdfDataset, NetCdfOpener};
