//! WMATA API client
//!
//! Every operation builds its query parameters, hands them to a single
//! request helper together with its [`Endpoint`], and returns the JSON
//! payload (or the one envelope field the endpoint is known for).

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::WmataConfig;
use crate::endpoint::Endpoint;
use crate::error::WmataError;
use crate::query::QueryParams;

/// Station code meaning "every station"
pub const ALL_STATIONS: &str = "All";

/// Trait for WMATA API clients
#[async_trait]
pub trait WmataClient: Send + Sync {
    /// List all rail lines (`Lines`)
    async fn lines(&self) -> Result<Value, WmataError>;

    /// List stations on one line (`Stations`)
    async fn stations(&self, line_code: &str) -> Result<Value, WmataError>;

    /// List every rail station (`Stations`)
    async fn all_stations(&self) -> Result<Value, WmataError>;

    /// Station detail, returned as the full envelope
    async fn station_info(&self, station_code: &str) -> Result<Value, WmataError>;

    /// Stations between two stations on the same line (`Path`)
    async fn rail_path(
        &self,
        from_station_code: &str,
        to_station_code: &str,
    ) -> Result<Value, WmataError>;

    /// Next train arrivals for one station, or all when None (`Trains`)
    async fn rail_predictions(&self, station_code: Option<&str>) -> Result<Value, WmataError>;

    /// Current rail incidents (`Incidents`)
    async fn rail_incidents(&self) -> Result<Value, WmataError>;

    /// Elevator and escalator outages, full envelope
    async fn elevator_incidents(&self, station_code: Option<&str>) -> Result<Value, WmataError>;

    /// Station entrances within `radius` meters of a point (`Entrances`)
    async fn station_entrances(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
    ) -> Result<Value, WmataError>;

    /// List bus routes (`Routes`)
    async fn bus_routes(&self) -> Result<Value, WmataError>;

    /// List bus stops (`Stops`)
    async fn bus_stops(&self) -> Result<Value, WmataError>;

    /// Schedule of a route on a date (today when None), full envelope
    async fn bus_schedule_by_route(
        &self,
        route_id: &str,
        date: Option<NaiveDate>,
        including_variations: bool,
    ) -> Result<Value, WmataError>;

    /// Shape and stops of a route on a date (today when None), full envelope
    async fn bus_route_details(
        &self,
        route_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Value, WmataError>;

    /// Live bus positions on a route (`BusPositions`)
    async fn bus_positions(
        &self,
        route_id: &str,
        including_variations: bool,
    ) -> Result<Value, WmataError>;

    /// Schedule at a stop on a date (today when None), full envelope
    async fn bus_schedule_by_stop(
        &self,
        stop_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Value, WmataError>;

    /// Next bus arrivals at a stop, full envelope
    async fn bus_prediction(&self, stop_id: &str) -> Result<Value, WmataError>;

    /// Check if the API is reachable and accepts the key
    async fn is_healthy(&self) -> bool;
}

/// HTTP client for the WMATA API
#[derive(Debug)]
pub struct HttpWmataClient {
    client: Client,
    config: WmataConfig,
}

impl HttpWmataClient {
    /// Create a new WMATA client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &WmataConfig) -> Result<Self, WmataError> {
        config.validate().map_err(WmataError::ConfigurationError)?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| WmataError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Create a client for the public API with the given key
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, WmataError> {
        Self::new(&WmataConfig::new(api_key))
    }

    /// The configuration this client was built with
    #[must_use]
    pub const fn config(&self) -> &WmataConfig {
        &self.config
    }

    /// Issue a GET for `endpoint` and return its payload
    async fn get(&self, endpoint: &Endpoint, params: QueryParams) -> Result<Value, WmataError> {
        let url = endpoint.url(&self.config.base_url);
        let params = params.with("api_key", self.config.api_key_str());

        debug!(%url, service = %endpoint.service(), "Requesting WMATA endpoint");

        let response = self
            .client
            .get(&url)
            .query(params.as_slice())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WmataError::Timeout {
                        timeout_secs: self.config.timeout_secs.unwrap_or_default(),
                    }
                } else {
                    WmataError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), %url, "WMATA request failed");
            return Err(WmataError::invalid_response(status, reason_phrase(&response)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WmataError::ParseError(e.to_string()))?;

        let payload = Self::parse_payload(&body)?;
        Self::unwrap_envelope(endpoint, payload)
    }

    /// Parse a response body as JSON
    fn parse_payload(body: &str) -> Result<Value, WmataError> {
        serde_json::from_str(body).map_err(|e| WmataError::ParseError(e.to_string()))
    }

    /// Pull the endpoint's named field out of the envelope, if it has one
    fn unwrap_envelope(endpoint: &Endpoint, payload: Value) -> Result<Value, WmataError> {
        let Some(key) = endpoint.envelope_key() else {
            return Ok(payload);
        };

        match payload {
            Value::Object(mut envelope) => envelope
                .remove(key)
                .ok_or_else(|| WmataError::MissingField(key.to_string())),
            _ => Err(WmataError::MissingField(key.to_string())),
        }
    }
}

/// Reason phrase from the status line, when the server sent a non-canonical one
fn reason_phrase(response: &reqwest::Response) -> Option<String> {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned())
}

#[async_trait]
impl WmataClient for HttpWmataClient {
    #[instrument(skip(self))]
    async fn lines(&self) -> Result<Value, WmataError> {
        self.get(&Endpoint::Lines, QueryParams::new()).await
    }

    #[instrument(skip(self))]
    async fn stations(&self, line_code: &str) -> Result<Value, WmataError> {
        let params = QueryParams::new().with("LineCode", line_code);
        self.get(&Endpoint::Stations, params).await
    }

    #[instrument(skip(self))]
    async fn all_stations(&self) -> Result<Value, WmataError> {
        self.get(&Endpoint::Stations, QueryParams::new()).await
    }

    #[instrument(skip(self))]
    async fn station_info(&self, station_code: &str) -> Result<Value, WmataError> {
        let params = QueryParams::new().with("StationCode", station_code);
        self.get(&Endpoint::StationInfo, params).await
    }

    #[instrument(skip(self))]
    async fn rail_path(
        &self,
        from_station_code: &str,
        to_station_code: &str,
    ) -> Result<Value, WmataError> {
        let params = QueryParams::new()
            .with("FromStationCode", from_station_code)
            .with("ToStationCode", to_station_code);
        self.get(&Endpoint::RailPath, params).await
    }

    #[instrument(skip(self))]
    async fn rail_predictions(&self, station_code: Option<&str>) -> Result<Value, WmataError> {
        let station_code = station_code.unwrap_or(ALL_STATIONS);
        let endpoint = Endpoint::Predictions(station_code.to_string());
        self.get(&endpoint, QueryParams::new()).await
    }

    #[instrument(skip(self))]
    async fn rail_incidents(&self) -> Result<Value, WmataError> {
        self.get(&Endpoint::RailIncidents, QueryParams::new()).await
    }

    #[instrument(skip(self))]
    async fn elevator_incidents(&self, station_code: Option<&str>) -> Result<Value, WmataError> {
        let params =
            QueryParams::new().with("StationCode", station_code.unwrap_or(ALL_STATIONS));
        self.get(&Endpoint::ElevatorIncidents, params).await
    }

    #[instrument(skip(self))]
    async fn station_entrances(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
    ) -> Result<Value, WmataError> {
        let params = QueryParams::new()
            .with("lat", latitude)
            .with("lon", longitude)
            .with("radius", radius);
        self.get(&Endpoint::StationEntrances, params).await
    }

    #[instrument(skip(self))]
    async fn bus_routes(&self) -> Result<Value, WmataError> {
        self.get(&Endpoint::BusRoutes, QueryParams::new()).await
    }

    #[instrument(skip(self))]
    async fn bus_stops(&self) -> Result<Value, WmataError> {
        self.get(&Endpoint::BusStops, QueryParams::new()).await
    }

    #[instrument(skip(self))]
    async fn bus_schedule_by_route(
        &self,
        route_id: &str,
        date: Option<NaiveDate>,
        including_variations: bool,
    ) -> Result<Value, WmataError> {
        let params = QueryParams::new()
            .with("routeId", route_id)
            .with_date("date", date)
            .with_flag("includingVariations", including_variations);
        self.get(&Endpoint::RouteSchedule, params).await
    }

    #[instrument(skip(self))]
    async fn bus_route_details(
        &self,
        route_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Value, WmataError> {
        let params = QueryParams::new()
            .with("routeId", route_id)
            .with_date("date", date);
        self.get(&Endpoint::RouteDetails, params).await
    }

    #[instrument(skip(self))]
    async fn bus_positions(
        &self,
        route_id: &str,
        including_variations: bool,
    ) -> Result<Value, WmataError> {
        let params = QueryParams::new()
            .with("routeId", route_id)
            .with_flag("includingVariations", including_variations);
        self.get(&Endpoint::BusPositions, params).await
    }

    #[instrument(skip(self))]
    async fn bus_schedule_by_stop(
        &self,
        stop_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Value, WmataError> {
        let params = QueryParams::new()
            .with("stopId", stop_id)
            .with_date("date", date);
        self.get(&Endpoint::StopSchedule, params).await
    }

    #[instrument(skip(self))]
    async fn bus_prediction(&self, stop_id: &str) -> Result<Value, WmataError> {
        let params = QueryParams::new().with("stopId", stop_id);
        self.get(&Endpoint::BusPredictions, params).await
    }

    async fn is_healthy(&self) -> bool {
        self.lines().await.is_ok()
    }
}
