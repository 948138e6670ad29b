//! Format-level summary of a NetCDF file: dimensions and variables.

use std::fmt;
use std::path::Path;

use crate::error::NetCdfResult;
use crate::native::open_file;

/// A named dimension and its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionInfo {
    pub name: String,
    pub len: usize,
}

/// A variable, its storage type and the dimensions it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableInfo {
    pub name: String,
    pub var_type: String,
    pub dimensions: Vec<String>,
}

/// Dimensions and variables of a file, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetInfo {
    pub dimensions: Vec<DimensionInfo>,
    pub variables: Vec<VariableInfo>,
}

impl DatasetInfo {
    pub fn variable(&self, name: &str) -> Option<&VariableInfo> {
        self.variables.iter().find(|v| v.name == name)
    }
}

impl fmt::Display for DatasetInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of dimensions: {}", self.dimensions.len())?;
        for (i, dim) in self.dimensions.iter().enumerate() {
            writeln!(f, "Dimension {}: Name='{}', Length={}", i, dim.name, dim.len)?;
        }
        writeln!(f, "Number of variables: {}", self.variables.len())?;
        for (i, var) in self.variables.iter().enumerate() {
            writeln!(
                f,
                "Variable {}: Name='{}', Type={}, Dims=[{}]",
                i,
                var.name,
                var.var_type,
                var.dimensions.join(", ")
            )?;
        }
        Ok(())
    }
}

/// List the dimensions and variables of the file at `path`.
pub fn inspect(path: &Path) -> NetCdfResult<DatasetInfo> {
    let file = open_file(path)?;

    let dimensions = file
        .dimensions()
        .map(|d| DimensionInfo {
            name: d.name(),
            len: d.len(),
        })
        .collect();

    let variables = file
        .variables()
        .map(|v| VariableInfo {
            name: v.name(),
            var_type: format!("{:?}", v.vartype()),
            dimensions: v.dimensions().iter().map(|d| d.name()).collect(),
        })
        .collect();

    Ok(DatasetInfo {
        dimensions,
        variables,
    })
}
