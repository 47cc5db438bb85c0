use serde::{Deserialize, Serialize};
use std::fmt;

// MAP DISPLAY ================================================================
/// Map style, aerial or road view
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    Aerial,
    Road,
}

impl MapStyle {
    /// Single letter code used by the `sty` parameter.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            MapStyle::Aerial => "a",
            MapStyle::Road => "r",
        }
    }
}

// LOCATIONS ==================================================================
/// A latitude/longitude pair. Values are not checked against geographic bounds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Coordinate::new(latitude, longitude)
    }
}

/// One end of a route, either a position or a free-text address.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RouteEndpoint {
    Coordinate(Coordinate),
    Address(String),
}

impl fmt::Display for RouteEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteEndpoint::Coordinate(c) => write!(f, "pos.{}_{}", c.latitude, c.longitude),
            RouteEndpoint::Address(address) => write!(f, "adr.{address}"),
        }
    }
}

impl From<Coordinate> for RouteEndpoint {
    fn from(coordinate: Coordinate) -> Self {
        RouteEndpoint::Coordinate(coordinate)
    }
}

impl From<(f64, f64)> for RouteEndpoint {
    fn from(pair: (f64, f64)) -> Self {
        RouteEndpoint::Coordinate(pair.into())
    }
}

impl From<&str> for RouteEndpoint {
    fn from(address: &str) -> Self {
        RouteEndpoint::Address(address.to_string())
    }
}

impl From<String> for RouteEndpoint {
    fn from(address: String) -> Self {
        RouteEndpoint::Address(address)
    }
}
