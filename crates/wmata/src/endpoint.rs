//! Services and endpoints of the WMATA API
//!
//! Every public client operation maps to exactly one [`Endpoint`], which
//! knows the service it lives under, the path segment to request and the
//! envelope key (if any) holding the result.

use std::fmt;

/// Top-level API grouping, rendered into the URL as `{service}.svc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Rail lines, stations, paths and entrances
    Rail,
    /// Real-time rail arrival predictions
    StationPrediction,
    /// Rail and elevator/escalator incidents
    Incidents,
    /// Bus routes, stops, schedules and positions
    Bus,
    /// Real-time bus arrival predictions
    NextBusService,
}

impl Service {
    /// Name used in the URL path
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rail => "Rail",
            Self::StationPrediction => "StationPrediction",
            Self::Incidents => "Incidents",
            Self::Bus => "Bus",
            Self::NextBusService => "NextBusService",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single API operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Lines,
    Stations,
    StationInfo,
    RailPath,
    /// Predictions for one station code, or `All`
    Predictions(String),
    RailIncidents,
    ElevatorIncidents,
    StationEntrances,
    BusRoutes,
    BusStops,
    RouteSchedule,
    RouteDetails,
    BusPositions,
    StopSchedule,
    BusPredictions,
}

impl Endpoint {
    /// Service this endpoint belongs to
    #[must_use]
    pub const fn service(&self) -> Service {
        match self {
            Self::Lines
            | Self::Stations
            | Self::StationInfo
            | Self::RailPath
            | Self::StationEntrances => Service::Rail,
            Self::Predictions(_) => Service::StationPrediction,
            Self::RailIncidents | Self::ElevatorIncidents => Service::Incidents,
            Self::BusRoutes
            | Self::BusStops
            | Self::RouteSchedule
            | Self::RouteDetails
            | Self::BusPositions
            | Self::StopSchedule => Service::Bus,
            Self::BusPredictions => Service::NextBusService,
        }
    }

    /// Path segment after `/json/`
    #[must_use]
    pub fn path(&self) -> String {
        let name = match self {
            Self::Lines => "JLines",
            Self::Stations => "JStations",
            Self::StationInfo => "JStationInfo",
            Self::RailPath => "JPath",
            Self::Predictions(station_code) => return format!("GetPrediction/{station_code}"),
            Self::RailIncidents => "Incidents",
            Self::ElevatorIncidents => "ElevatorIncidents",
            Self::StationEntrances => "JStationEntrances",
            Self::BusRoutes => "JRoutes",
            Self::BusStops => "JStops",
            Self::RouteSchedule => "JRouteSchedule",
            Self::RouteDetails => "JRouteDetails",
            Self::BusPositions => "JBusPositions",
            Self::StopSchedule => "JStopSchedule",
            Self::BusPredictions => "JPredictions",
        };
        name.to_string()
    }

    /// Envelope key unwrapped from the response, None to return it whole
    #[must_use]
    pub const fn envelope_key(&self) -> Option<&'static str> {
        match self {
            Self::Lines => Some("Lines"),
            Self::Stations => Some("Stations"),
            Self::RailPath => Some("Path"),
            Self::Predictions(_) => Some("Trains"),
            Self::RailIncidents => Some("Incidents"),
            Self::StationEntrances => Some("Entrances"),
            Self::BusRoutes => Some("Routes"),
            Self::BusStops => Some("Stops"),
            Self::BusPositions => Some("BusPositions"),
            Self::StationInfo
            | Self::ElevatorIncidents
            | Self::RouteSchedule
            | Self::RouteDetails
            | Self::StopSchedule
            | Self::BusPredictions => None,
        }
    }

    /// Full request URL under `base_url`
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}.svc/json/{}",
            base_url.trim_end_matches('/'),
            self.service(),
            self.path()
        )
    }
}
