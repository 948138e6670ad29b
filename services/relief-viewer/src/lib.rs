//! Global elevation relief viewer.
//!
//! Renders a bathymetry/elevation grid either as a whole-world overview from
//! a small resident raster or as a full-resolution area window read from a
//! large dataset on demand. Colouring, relief shading and PNG output come
//! from the `renderer` crate; this crate wires them to configuration.

pub mod assembler;
pub mod config;

pub use assembler::{AssemblerSettings, ImageAssembler};
pub use config::{DatasetFormat, LogFormat, ViewerConfig};
