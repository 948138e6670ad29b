//! Render orchestration: request in, finished image out.
//!
//! ```text
//! RenderRequest
//!      │ validate
//!      ├─ Overview ─► ResidentBuffer, whole viewport at the grid centre
//!      └─ Area ─────► LazyDataset (opened on first use)
//!                       converter from dataset extent, DatasetWindow
//!      │
//!      ▼
//! SampleWindow ─► encode_gray / encode_color ─► [apply_relief] ─► RenderedImage
//! ```
//!
//! Nothing is cached between renders. Any error aborts the render and no
//! image is returned.

use anyhow::Result;
use elevation_common::{
    ColorMode, GeoCoordinate, GeoOffsetConverter, GridExtent, ReliefResult, RenderMode,
    RenderRequest,
};
use grid_processor::{
    extract_window, load_overview, DatasetOpener, DatasetWindow, LazyDataset, ReadStrategy,
    ResidentBuffer, SampleWindow, WindowSource,
};
use renderer::{apply_relief, display_row, encode_color, encode_gray, RenderedImage};
use tracing::info;

use crate::config::ViewerConfig;

/// Render parameters that are fixed for the lifetime of an assembler.
#[derive(Debug, Clone)]
pub struct AssemblerSettings {
    /// Area viewport in dataset samples.
    pub area_viewport: GridExtent,
    /// Name of the elevation variable in the dataset.
    pub variable: String,
    pub read_strategy: ReadStrategy,
    pub gray_gain: f64,
    pub color_gain: f64,
}

impl Default for AssemblerSettings {
    fn default() -> Self {
        Self::from(&ViewerConfig::default())
    }
}

impl From<&ViewerConfig> for AssemblerSettings {
    fn from(config: &ViewerConfig) -> Self {
        Self {
            area_viewport: config.area.extent(),
            variable: config.dataset.variable.clone(),
            read_strategy: config.dataset.read_strategy,
            gray_gain: config.relief.gray_gain,
            color_gain: config.relief.color_gain,
        }
    }
}

/// Turns render requests into images.
pub struct ImageAssembler {
    overview: ResidentBuffer,
    overview_converter: GeoOffsetConverter,
    dataset: LazyDataset,
    settings: AssemblerSettings,
}

impl ImageAssembler {
    pub fn new(
        overview: ResidentBuffer,
        opener: Box<dyn DatasetOpener>,
        settings: AssemblerSettings,
    ) -> Self {
        let overview_converter = GeoOffsetConverter::for_grid(overview.extent());
        Self {
            overview,
            overview_converter,
            dataset: LazyDataset::new(opener),
            settings,
        }
    }

    /// Load the overview raster and prepare the dataset opener described by
    /// `config`. The dataset itself is not opened yet.
    pub fn from_config(config: &ViewerConfig) -> Result<Self> {
        let overview = load_overview(&config.overview.path, config.overview.extent());
        let opener = config.dataset_opener()?;
        Ok(Self::new(overview, opener, AssemblerSettings::from(config)))
    }

    /// Produce the image for `request`.
    pub fn render(&mut self, request: &RenderRequest) -> ReliefResult<RenderedImage> {
        request.validate()?;

        let window = match request.mode {
            RenderMode::Overview => self.overview_window()?,
            RenderMode::Area => self.area_window(request.center)?,
        };

        let (mut image, gain) = match request.color {
            ColorMode::Gray => (
                encode_gray(&window, &request.heights)?,
                self.settings.gray_gain,
            ),
            ColorMode::Color => (
                encode_color(&window, &request.heights, &request.ramp)?,
                self.settings.color_gain,
            ),
        };

        if request.edges {
            apply_relief(&mut image, &window, gain)?;
        }

        info!(
            mode = ?request.mode,
            color = ?request.color,
            edges = request.edges,
            center = %request.center,
            south_west = %window.south_west(),
            width = image.width(),
            height = image.height(),
            "Rendered image"
        );

        Ok(image)
    }

    fn overview_window(&self) -> ReliefResult<SampleWindow> {
        let extent = self.overview.extent();
        extract_window(&self.overview, self.overview.center(), extent.cols, extent.rows)
    }

    fn area_window(&mut self, center: GeoCoordinate) -> ReliefResult<SampleWindow> {
        let dataset = self.dataset.get()?;
        let converter = GeoOffsetConverter::for_grid(dataset.extent());
        let offset = converter.convert(center);

        let source = DatasetWindow::new(dataset, &self.settings.variable, self.settings.read_strategy)?;
        let viewport = self.settings.area_viewport;
        extract_window(&source, offset, viewport.cols, viewport.rows)
    }

    /// Display pixel `(x, y)` of `coord` on the overview image, `None` when
    /// the coordinate falls outside the overview grid.
    pub fn overview_marker(&self, coord: GeoCoordinate) -> Option<(usize, usize)> {
        if !(-90.0..=90.0).contains(&coord.lat) || !(-180.0..=180.0).contains(&coord.lon) {
            return None;
        }

        let extent = self.overview.extent();
        let offset = self.overview_converter.convert(coord);
        if offset.row >= extent.rows || offset.col >= extent.cols {
            return None;
        }
        Some((offset.col, display_row(offset.row, extent.rows)))
    }

    /// Coordinate under display pixel `(x, y)` of the overview image.
    pub fn overview_pixel_to_coordinate(&self, x: usize, y: usize) -> GeoCoordinate {
        let extent = self.overview.extent();
        GeoCoordinate::from_display_pixel(x as f64, y as f64, extent.cols, extent.rows)
    }

    /// Grid size of the full-resolution dataset, opening it if needed.
    pub fn dataset_extent(&mut self) -> ReliefResult<GridExtent> {
        Ok(self.dataset.get()?.extent())
    }

    pub fn is_dataset_open(&self) -> bool {
        self.dataset.is_open()
    }

    /// Release the dataset handle. A later area render reopens it.
    pub fn shutdown(&mut self) {
        self.dataset.close();
    }

    pub fn settings(&self) -> &AssemblerSettings {
        &self.settings
    }
}
