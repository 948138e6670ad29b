//! In-memory dataset, used for small grids and tests.

use elevation_common::{DatasetError, GridExtent, GridOffset};

use super::{ElevationDataset, VariableId};

/// A single named variable held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryDataset {
    variable: String,
    extent: GridExtent,
    samples: Vec<i16>,
}

impl MemoryDataset {
    pub fn new(
        variable: impl Into<String>,
        extent: GridExtent,
        samples: Vec<i16>,
    ) -> Result<Self, DatasetError> {
        let variable = variable.into();
        if samples.len() != extent.len() {
            return Err(DatasetError::open(
                format!("memory:{}", variable),
                format!("expected {} samples, got {}", extent.len(), samples.len()),
            ));
        }
        Ok(Self {
            variable,
            extent,
            samples,
        })
    }
}

impl ElevationDataset for MemoryDataset {
    fn extent(&self) -> GridExtent {
        self.extent
    }

    fn variable_id(&self, name: &str) -> Result<VariableId, DatasetError> {
        if name == self.variable {
            Ok(VariableId(0))
        } else {
            Err(DatasetError::VariableNotFound(name.to_string()))
        }
    }

    fn read_window(
        &self,
        variable: VariableId,
        offset: GridOffset,
        extent: GridExtent,
        out: &mut [i16],
    ) -> Result<(), DatasetError> {
        if variable != VariableId(0) {
            return Err(DatasetError::read(format!("no variable with id {}", variable.0)));
        }
        if !self.extent.contains_window(offset, extent) || out.len() != extent.len() {
            return Err(DatasetError::read(format!(
                "window {} at {} outside dataset {}",
                extent, offset, self.extent
            )));
        }

        for (i, dst) in out.chunks_exact_mut(extent.cols.max(1)).enumerate() {
            let start = (offset.row + i) * self.extent.cols + offset.col;
            dst.copy_from_slice(&self.samples[start..start + extent.cols]);
        }
        Ok(())
    }
}
