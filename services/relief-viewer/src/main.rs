//! Global elevation relief viewer.
//!
//! Renders the world overview or a full-resolution area around a position
//! and writes it as a PNG:
//!
//! ```text
//! relief-viewer --config viewer.yaml --color --edges -o world.png
//! relief-viewer --config viewer.yaml --area --lat 27.988 --lon 86.925 -o everest.png
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use elevation_common::{
    ColorMode, ColorRampConfig, GeoCoordinate, HeightRange, RenderMode, RenderRequest,
};
use relief_viewer::{DatasetFormat, ImageAssembler, LogFormat, ViewerConfig};
use renderer::png::create_png;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "relief-viewer")]
#[command(about = "Render global elevation and bathymetry relief images")]
struct Args {
    /// Configuration file path (built-in defaults when omitted)
    #[arg(short, long, env = "RELIEF_CONFIG")]
    config: Option<PathBuf>,

    /// Latitude of the view centre in degrees
    #[arg(long, default_value_t = 47.162, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the view centre in degrees
    #[arg(long, default_value_t = 19.503, allow_negative_numbers = true)]
    lon: f64,

    /// Render a full-resolution area instead of the world overview
    #[arg(long)]
    area: bool,

    /// Use the colour ramp instead of grayscale
    #[arg(long)]
    color: bool,

    /// Apply the relief overlay
    #[arg(long)]
    edges: bool,

    /// Lowest displayed height in metres
    #[arg(long, allow_negative_numbers = true)]
    height_min: Option<i16>,

    /// Highest displayed height in metres
    #[arg(long, allow_negative_numbers = true)]
    height_max: Option<i16>,

    /// Upper limit of the green lowland band
    #[arg(long)]
    green_limit: Option<i16>,

    /// Upper limit of the brown highland band
    #[arg(long)]
    brown_limit: Option<i16>,

    /// Output PNG path
    #[arg(short, long, default_value = "relief.png")]
    output: PathBuf,

    /// Log level (overrides the config file)
    #[arg(long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Print the dataset's dimensions and variables and exit
    #[arg(long)]
    inspect: bool,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(level, config.logging.format)?;

    info!(
        dataset = %config.dataset.path.display(),
        overview = %config.overview.path.display(),
        "Starting relief viewer"
    );

    if args.inspect {
        return inspect_dataset(&config);
    }

    let request = build_request(&args, &config);
    let mut assembler = ImageAssembler::from_config(&config)?;

    let image = assembler
        .render(&request)
        .with_context(|| format!("Failed to render {:?} view at {}", request.mode, request.center))?;

    if request.mode == RenderMode::Overview {
        if let Some((x, y)) = assembler.overview_marker(request.center) {
            info!(x, y, center = %request.center, "Overview marker position");
        }
    }

    let png = create_png(&image).map_err(anyhow::Error::msg)?;
    fs::write(&args.output, &png)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!(
        path = %args.output.display(),
        width = image.width(),
        height = image.height(),
        bytes = png.len(),
        "Wrote PNG"
    );

    assembler.shutdown();
    Ok(())
}

fn init_tracing(level: &str, format: LogFormat) -> Result<()> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    match format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.finish())?,
    }
    Ok(())
}

/// Command-line flags on top of the configured render defaults.
fn build_request(args: &Args, config: &ViewerConfig) -> RenderRequest {
    let defaults = config.render;
    let heights = HeightRange::new(
        args.height_min.unwrap_or(defaults.height_min),
        args.height_max.unwrap_or(defaults.height_max),
    );
    let ramp = ColorRampConfig::new(
        args.green_limit.unwrap_or(defaults.green_limit),
        args.brown_limit.unwrap_or(defaults.brown_limit),
    );

    RenderRequest::new(GeoCoordinate::new(args.lat, args.lon))
        .with_mode(if args.area {
            RenderMode::Area
        } else {
            RenderMode::Overview
        })
        .with_color(if args.color {
            ColorMode::Color
        } else {
            ColorMode::Gray
        })
        .with_edges(args.edges)
        .with_heights(heights)
        .with_ramp(ramp)
}

fn inspect_dataset(config: &ViewerConfig) -> Result<()> {
    match config.dataset.format {
        DatasetFormat::Raw => {
            println!(
                "Raw grid {}: {} rows x {} cols, variable '{}'",
                config.dataset.path.display(),
                config.dataset.rows,
                config.dataset.cols,
                config.dataset.variable
            );
            Ok(())
        }
        DatasetFormat::Netcdf => inspect_netcdf(config),
    }
}

#[cfg(feature = "netcdf")]
fn inspect_netcdf(config: &ViewerConfig) -> Result<()> {
    let info = netcdf_parser::inspect(&config.dataset.path)?;
    print!("{}", info);
    anyhow::ensure!(
        info.variable(&config.dataset.variable).is_some(),
        "Configured variable '{}' not found in {}",
        config.dataset.variable,
        config.dataset.path.display()
    );
    Ok(())
}

#[cfg(not(feature = "netcdf"))]
fn inspect_netcdf(config: &ViewerConfig) -> Result<()> {
    anyhow::bail!(
        "Cannot inspect {}: relief-viewer was built without the `netcdf` feature",
        config.dataset.path.display()
    )
}
