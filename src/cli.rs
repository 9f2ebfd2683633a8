use std::path::PathBuf;

use campus_nav_core::prelude::*;
use clap::{Parser, Subcommand};
use serde_json::json;

/// Offline campus routing and building hit-testing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML file naming the data sources
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// GeoJSON feature collection with walkable paths (line strings)
    #[arg(long)]
    pub paths: Option<PathBuf>,

    /// GeoJSON feature collection with building footprints
    #[arg(long)]
    pub footprints: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Shortest walking route between two points, printed as GeoJSON
    Route {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: GeoPoint,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: GeoPoint,
    },
    /// Building footprint under a tapped point
    Hit {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        at: GeoPoint,
    },
    /// Size of the loaded model
    Stats,
}

/// Parses `"LAT,LON"` in decimal degrees
pub fn parse_point(text: &str) -> Result<GeoPoint, String> {
    let (lat, lon) = text
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON, got '{text}'"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("invalid latitude '{lat}': {e}"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("invalid longitude '{lon}': {e}"))?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("coordinates out of range: {lat},{lon}"));
    }
    Ok(GeoPoint::new(lat, lon))
}

/// Runs `command` against `model`, writing results to stdout.
///
/// "No route" and "no building" are normal answers, not failures.
pub fn run(command: &Command, model: &CampusModel) -> anyhow::Result<()> {
    match command {
        Command::Route { from, to } => match model.find_route(*from, *to) {
            Ok(route) => {
                tracing::info!(
                    "Route with {} nodes, {:.1} m",
                    route.len(),
                    route.length()
                );
                println!("{}", route.to_geojson_string()?);
            }
            Err(e @ (Error::NoPointsFound | Error::Unreachable)) => {
                tracing::warn!("No route: {e}");
                println!("null");
            }
            Err(e) => return Err(e.into()),
        },
        Command::Hit { at } => {
            let output = match model.hit_test(*at) {
                Some(footprint) => json!({
                    "name": footprint.display_name,
                    "feature_index": footprint.feature_index,
                    "centroid": {
                        "latitude": footprint.centroid.latitude,
                        "longitude": footprint.centroid.longitude,
                    },
                }),
                None => serde_json::Value::Null,
            };
            println!("{output}");
        }
        Command::Stats => {
            println!(
                "{}",
                json!({
                    "nodes": model.node_count(),
                    "directed_edges": model.edge_count(),
                    "footprints": model.footprint_count(),
                })
            );
        }
    }
    Ok(())
}
