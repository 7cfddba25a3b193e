use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use libgeo::geometry::Point;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the location database, overriding the configured default
    #[arg(short, long)]
    pub database: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Data format for printing results
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
    /// Include all fields in the output
    #[arg(long)]
    pub full: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Remember a database path for future invocations")]
    Use { database: PathBuf },
    #[command(about = "Show which database is in use")]
    Status,
    #[command(about = "Add a new location to the database")]
    Add {
        /// Longitude in decimal degrees, east positive
        #[arg(short = 'x', long, allow_negative_numbers = true, requires = "latitude")]
        longitude: Option<f64>,
        /// Latitude in decimal degrees, north positive
        #[arg(short = 'y', long, allow_negative_numbers = true, requires = "longitude")]
        latitude: Option<f64>,
        /// The point in WKT notation, e.g. 'POINT(-122.4194 37.7749)'
        #[arg(short, long, conflicts_with_all = ["longitude", "latitude"])]
        point: Option<Point>,
    },
    #[command(about = "List locations")]
    List {
        #[command(flatten)]
        output: OutputArgs,
        /// Only show locations with longitude >= this value
        #[arg(long, allow_negative_numbers = true)]
        min_longitude: Option<f64>,
        /// Only show locations with longitude <= this value
        #[arg(long, allow_negative_numbers = true)]
        max_longitude: Option<f64>,
        /// Only show locations with latitude >= this value
        #[arg(long, allow_negative_numbers = true)]
        min_latitude: Option<f64>,
        /// Only show locations with latitude <= this value
        #[arg(long, allow_negative_numbers = true)]
        max_latitude: Option<f64>,
    },
    #[command(about = "Show a single location")]
    Show {
        id: i64,
        #[command(flatten)]
        output: OutputArgs,
    },
    #[command(
        about = "Modify the point of a location",
        group(
            clap::ArgGroup::new("modify")
                .required(true)
                .multiple(true)
                .args(&["longitude", "latitude", "point"]),
        ))]
    Modify {
        id: i64,
        /// New longitude in decimal degrees
        #[arg(short = 'x', long, allow_negative_numbers = true)]
        longitude: Option<f64>,
        /// New latitude in decimal degrees
        #[arg(short = 'y', long, allow_negative_numbers = true)]
        latitude: Option<f64>,
        /// The new point in WKT notation
        #[arg(short, long, conflicts_with_all = ["longitude", "latitude"])]
        point: Option<Point>,
    },
    #[command(about = "Remove a location from the database")]
    Remove { id: i64 },
}
