//! Viewer configuration loaded from YAML.
//!
//! Every section is optional and falls back to the values the viewer uses
//! for the GEBCO 2023 grid. String values may reference environment
//! variables as `${VAR}` or `${VAR:-default}`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
#[cfg(not(feature = "netcdf"))]
use elevation_common::DatasetError;
use elevation_common::{ColorRampConfig, GridExtent, HeightRange};
#[cfg(not(feature = "netcdf"))]
use grid_processor::ElevationDataset;
use grid_processor::{DatasetOpener, RawGridOpener, ReadStrategy};
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration Types
// ============================================================================

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub dataset: DatasetConfig,
    pub overview: OverviewConfig,
    pub area: AreaConfig,
    pub relief: ReliefConfig,
    pub render: RenderDefaults,
    pub logging: LoggingConfig,
}

/// On-disk format of the full-resolution dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    #[default]
    Netcdf,
    Raw,
}

/// Full-resolution dataset used for area renders.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: PathBuf,
    pub format: DatasetFormat,
    pub variable: String,
    /// Grid rows of a raw dataset. NetCDF files report their own size.
    pub rows: usize,
    /// Grid columns of a raw dataset.
    pub cols: usize,
    pub read_strategy: ReadStrategy,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/GEBCO_2023.nc"),
            format: DatasetFormat::Netcdf,
            variable: "elevation".to_string(),
            rows: 43200,
            cols: 86400,
            read_strategy: ReadStrategy::Bulk,
        }
    }
}

/// Resident low-resolution world raster.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OverviewConfig {
    pub path: PathBuf,
    pub width: usize,
    pub height: usize,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/overview.raw"),
            width: 2160,
            height: 1080,
        }
    }
}

impl OverviewConfig {
    pub fn extent(&self) -> GridExtent {
        GridExtent::new(self.height, self.width)
    }
}

/// Size of the area viewport in dataset samples.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AreaConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl AreaConfig {
    pub fn extent(&self) -> GridExtent {
        GridExtent::new(self.height, self.width)
    }
}

/// Brightening gains of the relief overlay.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct ReliefConfig {
    pub gray_gain: f64,
    pub color_gain: f64,
}

impl Default for ReliefConfig {
    fn default() -> Self {
        Self {
            gray_gain: 3.0,
            color_gain: 10.0,
        }
    }
}

/// Initial height range and ramp limits, in metres.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderDefaults {
    pub height_min: i16,
    pub height_max: i16,
    pub green_limit: i16,
    pub brown_limit: i16,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            height_min: -12000,
            height_max: 9000,
            green_limit: 2000,
            brown_limit: 4000,
        }
    }
}

impl RenderDefaults {
    pub fn heights(&self) -> HeightRange {
        HeightRange::new(self.height_min, self.height_max)
    }

    pub fn ramp(&self) -> ColorRampConfig {
        ColorRampConfig::new(self.green_limit, self.brown_limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

// ============================================================================
// Loading Functions
// ============================================================================

impl ViewerConfig {
    /// Load and validate a configuration file with environment variable
    /// substitution.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read viewer config from {:?}", path.as_ref()))?;

        Self::from_yaml(&content)
            .with_context(|| format!("Invalid viewer config in {:?}", path.as_ref()))
    }

    /// Parse and validate configuration YAML.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let expanded = expand_env_vars(content)?;

        let config: ViewerConfig = serde_yaml::from_str(&expanded)
            .with_context(|| "Failed to parse viewer config YAML")?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_dataset(&self.dataset)?;

        anyhow::ensure!(
            self.overview.width > 0 && self.overview.height > 0,
            "Overview size must be positive, got {}x{}",
            self.overview.width,
            self.overview.height
        );
        anyhow::ensure!(
            self.area.width > 0 && self.area.height > 0,
            "Area viewport must be positive, got {}x{}",
            self.area.width,
            self.area.height
        );

        for (name, gain) in [
            ("gray_gain", self.relief.gray_gain),
            ("color_gain", self.relief.color_gain),
        ] {
            anyhow::ensure!(
                gain.is_finite() && gain >= 0.0,
                "Relief {} must be a non-negative number, got {}",
                name,
                gain
            );
        }

        // Ramp limits are checked per colour request, like the height range
        // for grayscale.
        self.render.heights().validate()?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        anyhow::ensure!(
            valid_levels.contains(&self.logging.level.as_str()),
            "Invalid log level: {}. Must be one of: {:?}",
            self.logging.level,
            valid_levels
        );

        Ok(())
    }

    /// Opener for the configured dataset, used on the first area render.
    pub fn dataset_opener(&self) -> Result<Box<dyn DatasetOpener>> {
        match self.dataset.format {
            DatasetFormat::Raw => Ok(Box::new(RawGridOpener {
                path: self.dataset.path.clone(),
                extent: GridExtent::new(self.dataset.rows, self.dataset.cols),
                variable: self.dataset.variable.clone(),
            })),
            #[cfg(feature = "netcdf")]
            DatasetFormat::Netcdf => Ok(Box::new(netcdf_parser::NetCdfOpener::new(
                self.dataset.path.clone(),
            ))),
            #[cfg(not(feature = "netcdf"))]
            DatasetFormat::Netcdf => Ok(Box::new(UnsupportedNetCdfOpener {
                path: self.dataset.path.clone(),
            })),
        }
    }
}

/// Stands in for the NetCDF reader when it is not compiled in. The overview
/// still renders; opening the dataset for an area view fails.
#[cfg(not(feature = "netcdf"))]
struct UnsupportedNetCdfOpener {
    path: PathBuf,
}

#[cfg(not(feature = "netcdf"))]
impl DatasetOpener for UnsupportedNetCdfOpener {
    fn open(&self) -> std::result::Result<Box<dyn ElevationDataset>, DatasetError> {
        Err(DatasetError::open(
            self.path.display().to_string(),
            "relief-viewer was built without the `netcdf` feature",
        ))
    }

    fn describe(&self) -> String {
        format!("netcdf:{}", self.path.display())
    }
}

// ============================================================================
// Environment Variable Expansion
// ============================================================================

/// Expand environment variables in YAML content.
/// Supports ${VAR} and ${VAR:-default} syntax.
fn expand_env_vars(content: &str) -> Result<String> {
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' || chars.peek() != Some(&'{') {
            result.push(ch);
            continue;
        }
        chars.next(); // consume '{'

        let mut expr = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(c) => expr.push(c),
                None => anyhow::bail!("Unclosed variable substitution: ${{{}", expr),
            }
        }

        result.push_str(&resolve_var_expr(&expr)?);
    }

    Ok(result)
}

/// Resolve `VAR` or `VAR:-default`. An empty variable counts as unset.
fn resolve_var_expr(expr: &str) -> Result<String> {
    if let Some((name, default)) = expr.split_once(":-") {
        match std::env::var(name.trim()) {
            Ok(val) if !val.is_empty() => Ok(val),
            _ => Ok(default.to_string()),
        }
    } else {
        std::env::var(expr.trim()).with_context(|| format!("Environment variable {} not set", expr))
    }
}

// ============================================================================
// Validation
// ============================================================================

fn validate_dataset(dataset: &DatasetConfig) -> Result<()> {
    anyhow::ensure!(
        !dataset.variable.is_empty(),
        "Dataset variable name cannot be empty"
    );
    anyhow::ensure!(
        !dataset.path.as_os_str().is_empty(),
        "Dataset path cannot be empty"
    );
    if dataset.format == DatasetFormat::Raw {
        anyhow::ensure!(
            dataset.rows > 0 && dataset.cols > 0,
            "Raw dataset needs positive rows and cols, got {}x{}",
            dataset.cols,
            dataset.rows
        );
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
