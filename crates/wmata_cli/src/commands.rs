//! Subcommands and their dispatch onto the client

use chrono::NaiveDate;
use clap::Subcommand;
use serde_json::Value;
use wmata::{WmataClient, WmataError};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List rail lines
    Lines,

    /// List rail stations, optionally only those on one line
    Stations {
        /// Line code (RD, BL, YL, OR, GR, SV)
        #[arg(short, long)]
        line: Option<String>,
    },

    /// Show detail for one station
    StationInfo {
        /// Station code, e.g. A01
        station: String,
    },

    /// List the stations between two stations on the same line
    RailPath {
        /// Origin station code
        from: String,
        /// Destination station code
        to: String,
    },

    /// Next train arrivals
    Predictions {
        /// Station code (all stations when omitted)
        #[arg(short, long)]
        station: Option<String>,
    },

    /// Current rail incidents
    Incidents,

    /// Elevator and escalator outages
    ElevatorIncidents {
        /// Station code (all stations when omitted)
        #[arg(short, long)]
        station: Option<String>,
    },

    /// Station entrances near a point
    Entrances {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Search radius in meters
        #[arg(long, default_value = "500")]
        radius: f64,
    },

    /// List bus routes
    BusRoutes,

    /// List bus stops
    BusStops,

    /// Schedule of a bus route
    RouteSchedule {
        /// Route ID, e.g. 70
        route: String,
        /// Service date as YYYY-MM-DD (today when omitted)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Include route variations (e.g. 70, 70v1)
        #[arg(long)]
        variations: bool,
    },

    /// Shape and stops of a bus route
    RouteDetails {
        /// Route ID
        route: String,
        /// Service date as YYYY-MM-DD (today when omitted)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Live bus positions on a route
    BusPositions {
        /// Route ID
        route: String,
        /// Include route variations
        #[arg(long)]
        variations: bool,
    },

    /// Schedule at a bus stop
    StopSchedule {
        /// Stop ID
        stop: String,
        /// Service date as YYYY-MM-DD (today when omitted)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Next bus arrivals at a stop
    BusPredictions {
        /// Stop ID
        stop: String,
    },
}

/// Run one subcommand against the client and return its payload
pub async fn run(command: &Commands, client: &dyn WmataClient) -> Result<Value, WmataError> {
    match command {
        Commands::Lines => client.lines().await,
        Commands::Stations { line: Some(line) } => client.stations(line).await,
        Commands::Stations { line: None } => client.all_stations().await,
        Commands::StationInfo { station } => client.station_info(station).await,
        Commands::RailPath { from, to } => client.rail_path(from, to).await,
        Commands::Predictions { station } => client.rail_predictions(station.as_deref()).await,
        Commands::Incidents => client.rail_incidents().await,
        Commands::ElevatorIncidents { station } => {
            client.elevator_incidents(station.as_deref()).await
        },
        Commands::Entrances { lat, lon, radius } => {
            client.station_entrances(*lat, *lon, *radius).await
        },
        Commands::BusRoutes => client.bus_routes().await,
        Commands::BusStops => client.bus_stops().await,
        Commands::RouteSchedule {
            route,
            date,
            variations,
        } => client.bus_schedule_by_route(route, *date, *variations).await,
        Commands::RouteDetails { route, date } => client.bus_route_details(route, *date).await,
        Commands::BusPositions { route, variations } => {
            client.bus_positions(route, *variations).await
        },
        Commands::StopSchedule { stop, date } => client.bus_schedule_by_stop(stop, *date).await,
        Commands::BusPredictions { stop } => client.bus_prediction(stop).await,
    }
}
