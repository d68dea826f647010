//! Geostationary mapper command line.
//!
//! Builds the calibrated VRT for an Eumetcast dataset description and writes
//! it as XML. The dataset size is given on the command line; every channel
//! source opens at that size unless listed with `--missing-band`.

mod config;

use anyhow::{Context, Result};
use calibration::{load_catalog_config, Calibration, SatelliteCatalog};
use clap::Parser;
use geostationary_mapper::{DatasetDescription, Mapper, VirtualSource};
use sat_common::SatelliteFamily;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vrt::{OpenedDataset, RasterInfo, StaticDriver};

use config::{load_cli_config, CliConfig, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "geo-mapper")]
#[command(about = "Build a calibrated VRT for Eumetcast geostationary products")]
struct Args {
    /// Dataset description, e.g. MSG(/data/x,H,MSG1,201501010000,1,Y,T,1,1)
    #[arg(required_unless_present = "list_satellites")]
    description: Option<String>,

    /// Width of the opened dataset in pixels
    #[arg(long, required_unless_present = "list_satellites")]
    width: Option<usize>,

    /// Height of the opened dataset in pixels
    #[arg(long, required_unless_present = "list_satellites")]
    height: Option<usize>,

    /// Channel (1-based) whose source cannot be opened
    #[arg(long = "missing-band")]
    missing_bands: Vec<usize>,

    /// Configuration file path
    #[arg(short, long, env = "GEO_MAPPER_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog override file, may be repeated
    #[arg(long = "catalog")]
    catalogs: Vec<PathBuf>,

    /// Write the VRT here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the calibration catalog and exit
    #[arg(long)]
    list_satellites: bool,

    /// Log level (overrides the config file)
    #[arg(long, env = "GEO_MAPPER_LOG_LEVEL")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_cli_config(path)?,
        None => CliConfig::default(),
    };
    init_tracing(&config, args.log_level.as_deref());

    let catalog = build_catalog(&config, &args)?;

    if args.list_satellites {
        return list_satellites(&catalog);
    }

    let (Some(description), Some(width), Some(height)) = (&args.description, args.width, args.height)
    else {
        anyhow::bail!("A dataset description, --width and --height are required");
    };

    let dataset = OpenedDataset::new(description.as_str(), width, height);
    let driver = build_driver(description, width, height, &args.missing_bands)?;

    let mapper = Mapper::with_catalog(&catalog, description, &dataset, &BTreeMap::new(), &driver)
        .with_context(|| format!("Failed to map dataset {}", description))?;
    let xml = mapper.vrt().to_xml()?;

    match &args.output {
        Some(path) => {
            fs::write(path, xml).with_context(|| format!("Failed to write VRT to {:?}", path))?;
            info!(path = %path.display(), bands = mapper.vrt().band_count(), "Wrote VRT");
        }
        None => println!("{}", xml),
    }

    Ok(())
}

/// Install the global subscriber; logs go to stderr so stdout stays XML.
fn init_tracing(config: &CliConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(config.logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

/// Builtin catalog with config-file overrides applied first, then `--catalog` files.
fn build_catalog(config: &CliConfig, args: &Args) -> Result<SatelliteCatalog> {
    let mut catalog = SatelliteCatalog::builtin();
    for path in config.catalog_files.iter().chain(&args.catalogs) {
        let entries = load_catalog_config(path)
            .with_context(|| format!("Failed to load catalog overrides from {:?}", path))?;
        catalog = catalog.with_overrides(entries);
    }
    Ok(catalog)
}

/// Driver opening every channel at the dataset size except the missing ones.
fn build_driver(
    description: &str,
    width: usize,
    height: usize,
    missing_bands: &[usize],
) -> Result<StaticDriver> {
    let mut driver = StaticDriver::with_fallback(RasterInfo::new(width, height));
    if missing_bands.is_empty() {
        return Ok(driver);
    }

    let parsed = DatasetDescription::parse(description)?;
    let (resolution, data_type) = SatelliteFamily::from_name(&parsed.satellite).source_mode();
    for &channel in missing_bands {
        let path = VirtualSource {
            path: &parsed.path,
            resolution,
            satellite: &parsed.satellite,
            timestamp: &parsed.timestamp,
            channel,
            data_type,
        };
        driver = driver.deny(path.to_string());
    }
    Ok(driver)
}

#[derive(Serialize)]
struct SatelliteSummary<'a> {
    name: &'a str,
    family: String,
    wavelengths: &'a [u32],
    calibration: &'static str,
    has_nodata: bool,
}

fn list_satellites(catalog: &SatelliteCatalog) -> Result<()> {
    for entry in catalog.entries() {
        let summary = SatelliteSummary {
            name: &entry.name,
            family: format!("{:?}", entry.family()),
            wavelengths: &entry.wavelengths,
            calibration: match entry.calibration {
                Calibration::Linear { .. } => "linear",
                Calibration::Lut(_) => "lut",
                Calibration::Uncalibrated => "none",
            },
            has_nodata: entry.nodata.is_some(),
        };
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}
