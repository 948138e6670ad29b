//! Headerless raw grid files read window by window from disk.
//!
//! The file holds `rows * cols` native-endian `i16` samples, row-major,
//! southernmost row first (the same layout as the overview file, at full
//! resolution). Only the rows a window touches are read.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use elevation_common::{DatasetError, GridExtent, GridOffset};
use tracing::debug;

use super::{DatasetOpener, ElevationDataset, VariableId};

const SAMPLE_BYTES: u64 = 2;

/// Raw grid file exposed as a single-variable dataset.
#[derive(Debug)]
pub struct RawGridDataset {
    path: PathBuf,
    file: File,
    extent: GridExtent,
    variable: String,
}

impl RawGridDataset {
    /// Open `path` as a grid of `extent`, exposing it under `variable`.
    pub fn open(path: &Path, extent: GridExtent, variable: &str) -> Result<Self, DatasetError> {
        let file = File::open(path)
            .map_err(|e| DatasetError::open(path.display().to_string(), e.to_string()))?;

        let len = file
            .metadata()
            .map_err(|e| DatasetError::open(path.display().to_string(), e.to_string()))?
            .len();
        let expected = extent.len() as u64 * SAMPLE_BYTES;
        if len < expected {
            return Err(DatasetError::open(
                path.display().to_string(),
                format!("file has {} bytes, grid {} needs {}", len, extent, expected),
            ));
        }

        Ok(Self {
            path: path.to_path_buf(),
            file,
            extent,
            variable: variable.to_string(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ElevationDataset for RawGridDataset {
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

        let mut file = &self.file;
        let mut row_bytes = vec![0u8; extent.cols * SAMPLE_BYTES as usize];

        for (i, dst) in out.chunks_exact_mut(extent.cols.max(1)).enumerate() {
            let index = ((offset.row + i) * self.extent.cols + offset.col) as u64;
            file.seek(SeekFrom::Start(index * SAMPLE_BYTES))?;
            file.read_exact(&mut row_bytes)?;

            for (sample, pair) in dst.iter_mut().zip(row_bytes.chunks_exact(2)) {
                *sample = i16::from_ne_bytes([pair[0], pair[1]]);
            }
        }

        debug!(path = %self.path.display(), offset = %offset, extent = %extent, "Read raw grid window");
        Ok(())
    }
}

/// Opens a [`RawGridDataset`] on demand.
#[derive(Debug, Clone)]
pub struct RawGridOpener {
    pub path: PathBuf,
    pub extent: GridExtent,
    pub variable: String,
}

impl DatasetOpener for RawGridOpener {
    fn open(&self) -> Result<Box<dyn ElevationDataset>, DatasetError> {
        Ok(Box::new(RawGridDataset::open(
            &self.path,
            self.extent,
            &self.variable,
        )?))
    }

    fn describe(&self) -> String {
        format!("raw:{}", self.path.display())
    }
}
