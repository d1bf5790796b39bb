//! Client for the WMATA transit data API
//!
//! Covers the rail and bus services of the [WMATA developer API](https://developer.wmata.com):
//! lines, stations, paths, arrival predictions, incidents, entrances, bus routes,
//! stops, schedules and live positions.
//!
//! # Architecture
//!
//! [`WmataClient`] defines one method per API operation and is implemented by
//! [`HttpWmataClient`]. Each operation maps to an [`Endpoint`], which knows the
//! [`Service`] it lives under and the envelope field holding its result.
//! Payloads are returned as opaque [`serde_json::Value`]s; the crate does not
//! model the API's schema.
//!
//! # Example
//!
//! ```rust,ignore
//! use wmata::{HttpWmataClient, WmataClient};
//!
//! let client = HttpWmataClient::with_api_key("my-key")?;
//!
//! let lines = client.lines().await?;
//! let trains = client.rail_predictions(Some("A01")).await?;
//! let buses = client.bus_positions("70", true).await?;
//! ```

mod client;
mod config;
mod endpoint;
mod error;
mod query;

pub use client::{ALL_STATIONS, HttpWmataClient, WmataClient};
pub use config::WmataConfig;
pub use endpoint::{Endpoint, Service};
pub use error::WmataError;
