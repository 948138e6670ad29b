//! Common types shared across the relief viewer crates.

pub mod error;
pub mod geo;
pub mod ramp;
pub mod request;

pub use error::{DatasetError, ReliefError, ReliefResult};
pub use geo::{GeoCoordinate, GeoOffsetConverter, GridExtent, GridOffset};
pub use ramp::{ColorRampConfig, HeightRange, SEA_LEVEL};
pub use request::{ColorMode, RenderMode, RenderRequest};
