use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use env_logger::{Builder, Env};
use serde::Serialize;
use u_dispatch::{
    config::GeocoderConfig,
    models::{GeoPoint, ResolutionSummary, RoutableStop, RoutePlan},
    navigation::maps_directions_url,
    planner::RoutePlanner,
};

/// Orders delivery stops for one courier run
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file with an array of stops: {"id", "address", "coordinates"?}
    #[arg(short, long)]
    input: PathBuf,

    /// Depot latitude (requires --depot-lon)
    #[arg(long, requires = "depot_lon", allow_negative_numbers = true)]
    depot_lat: Option<f64>,

    /// Depot longitude (requires --depot-lat)
    #[arg(long, requires = "depot_lat", allow_negative_numbers = true)]
    depot_lon: Option<f64>,

    /// Depot address, geocoded with the same provider as the stops
    #[arg(long, conflicts_with_all = ["depot_lat", "depot_lon"])]
    depot_address: Option<String>,

    /// Locality appended to every query (overrides GEOCODER_LOCALITY)
    #[arg(short, long)]
    locality: Option<String>,

    /// Write the plan here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct Output<'a> {
    summary: ResolutionSummary,
    message: String,
    total_distance_m: f64,
    maps_url: Option<String>,
    plan: &'a RoutePlan,
}

fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let mut config = GeocoderConfig::from_env()?;
    if cli.locality.is_some() {
        config.locality = cli.locality.clone();
    }
    log::info!(
        "geocoding with {:?} at {} (locality: {})",
        config.provider,
        config.base_url,
        config.locality.as_deref().unwrap_or("none")
    );

    let stops: Vec<RoutableStop> = serde_json::from_str(&fs::read_to_string(&cli.input)?)?;
    log::info!("loaded {} stops from {}", stops.len(), cli.input.display());

    let mut planner = RoutePlanner::new(config.build_geocoder()?);
    let mut origin = None;
    if let (Some(lat), Some(lon)) = (cli.depot_lat, cli.depot_lon) {
        let depot = GeoPoint::new(lat, lon)
            .ok_or_else(|| format!("depot coordinate out of range: ({lat}, {lon})"))?;
        planner = planner.with_depot(depot);
        origin = Some(depot);
    } else if let Some(address) = &cli.depot_address {
        planner = planner.with_depot_address(address)?;
        origin = planner.optimizer().depot();
    }

    let plan = planner.plan(stops)?;
    let summary = plan.summary();
    if summary.is_complete() {
        log::info!("{}", summary);
    } else {
        log::warn!("{}", summary);
    }

    let output = Output {
        summary,
        message: summary.to_string(),
        total_distance_m: plan.total_distance_m(),
        maps_url: maps_directions_url(&plan, origin),
        plan: &plan,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("plan written to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
