//! External elevation datasets and windowed reads from them.
//!
//! A dataset is opened lazily, kept for the lifetime of its owner and read
//! one window at a time:
//!
//! ```text
//! DatasetOpener::open()  ──►  Box<dyn ElevationDataset>   (held by LazyDataset)
//!                                   │
//!                    variable_id("elevation")
//!                                   │
//!                                   ▼
//!          DatasetWindow { dataset, variable, strategy }  : WindowSource
//!                                   │
//!       windows past the dataset edge: RangeError, nothing is read
//!                  Bulk: one read_window for the whole window
//!             RowByRow: one read_window per row, south to north
//! ```

mod memory;
mod raw;

pub use memory::MemoryDataset;
pub use raw::{RawGridDataset, RawGridOpener};

use elevation_common::{DatasetError, GridExtent, GridOffset, ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::window::WindowSource;

/// Handle of a variable inside a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableId(pub usize);

/// Read access to a gridded elevation dataset.
pub trait ElevationDataset {
    /// Grid size of the elevation variable (rows = latitude, cols = longitude).
    fn extent(&self) -> GridExtent;

    /// Resolve a variable by name.
    fn variable_id(&self, name: &str) -> Result<VariableId, DatasetError>;

    /// Read `extent` samples anchored at `offset` into `out`
    /// (`out.len() == extent.len()`), row-major, south to north.
    ///
    /// Windows outside the dataset dimensions fail with [`DatasetError::Read`].
    fn read_window(
        &self,
        variable: VariableId,
        offset: GridOffset,
        extent: GridExtent,
        out: &mut [i16],
    ) -> Result<(), DatasetError>;
}

/// Opens a dataset on demand.
pub trait DatasetOpener {
    fn open(&self) -> Result<Box<dyn ElevationDataset>, DatasetError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// How a window is fetched from a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadStrategy {
    /// One call covering the whole window.
    #[default]
    Bulk,
    /// One call per row, trading more calls for smaller reads.
    RowByRow,
}

/// A dataset variable viewed as a [`WindowSource`].
pub struct DatasetWindow<'a> {
    dataset: &'a dyn ElevationDataset,
    variable: VariableId,
    strategy: ReadStrategy,
}

impl<'a> DatasetWindow<'a> {
    /// Resolve `variable` in `dataset`.
    pub fn new(
        dataset: &'a dyn ElevationDataset,
        variable: &str,
        strategy: ReadStrategy,
    ) -> Result<Self, DatasetError> {
        let variable = dataset.variable_id(variable)?;
        Ok(Self {
            dataset,
            variable,
            strategy,
        })
    }
}

impl WindowSource for DatasetWindow<'_> {
    fn extent(&self) -> GridExtent {
        self.dataset.extent()
    }

    fn read(&self, offset: GridOffset, extent: GridExtent) -> ReliefResult<Vec<i16>> {
        let bounds = self.dataset.extent();
        if !bounds.contains_window(offset, extent) {
            return Err(ReliefError::range(offset, extent, bounds));
        }

        let mut out = vec![0i16; extent.len()];

        match self.strategy {
            ReadStrategy::Bulk => {
                self.dataset
                    .read_window(self.variable, offset, extent, &mut out)?;
            }
            ReadStrategy::RowByRow => {
                let row_extent = GridExtent::new(1, extent.cols);
                // chunks_exact_mut(0) panics
                for (i, row) in out.chunks_exact_mut(extent.cols.max(1)).enumerate() {
                    let row_offset = GridOffset::new(offset.row + i, offset.col);
                    self.dataset
                        .read_window(self.variable, row_offset, row_extent, row)?;
                }
            }
        }

        debug!(
            offset = %offset,
            extent = %extent,
            strategy = ?self.strategy,
            "Read dataset window"
        );
        Ok(out)
    }
}

/// A dataset handle opened on first use and kept until [`close`](Self::close)
/// or drop.
pub struct LazyDataset {
    opener: Box<dyn DatasetOpener>,
    handle: Option<Box<dyn ElevationDataset>>,
}

impl LazyDataset {
    pub fn new(opener: Box<dyn DatasetOpener>) -> Self {
        Self {
            opener,
            handle: None,
        }
    }

    /// The open dataset, opening it first if needed.
    pub fn get(&mut self) -> Result<&dyn ElevationDataset, DatasetError> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => {
                let handle = self.opener.open()?;
                info!(
                    source = %self.opener.describe(),
                    extent = %handle.extent(),
                    "Opened elevation dataset"
                );
                handle
            }
        };
        Ok(&**self.handle.insert(handle))
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Release the dataset handle. A later [`get`](Self::get) reopens it.
    pub fn close(&mut self) {
        if self.handle.take().is_some() {
            info!(source = %self.opener.describe(), "Closed elevation dataset");
        }
    }
}
