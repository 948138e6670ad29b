//! Windowed access to global elevation grids.
//!
//! Two kinds of backing storage feed the renderer:
//!
//! - **Resident buffer**: the low-resolution world grid, loaded once and
//!   sliced in memory.
//! - **Datasets**: the full-resolution grid behind the [`ElevationDataset`]
//!   trait, read one window per render.
//!
//! # Architecture
//!
//! ```text
//! center GridOffset, width, height
//!      │
//!      ▼
//! south_west_corner()  ── center - size/2, RangeError on underflow
//!      │
//!      ▼
//! WindowSource::read()
//!      ├─► ResidentBuffer  (RangeError past the buffer edge)
//!      └─► DatasetWindow   (DatasetError from the dataset)
//!      │
//!      ▼
//! SampleWindow (row 0 = south)
//! ```

pub mod resident;
pub mod source;
pub mod window;

pub use resident::{load_overview, ResidentBuffer};
pub use source::{
    DatasetOpener, DatasetWindow, ElevationDataset, LazyDataset, MemoryDataset, RawGridDataset,
    RawGridOpener, ReadStrategy, VariableId,
};
pub use window::{extract_window, south_west_corner, SampleWindow, WindowSource};
