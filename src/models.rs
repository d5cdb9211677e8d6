//! Record types deserialized from Great Circle Mapper responses.
//!
//! Every record is an immutable snapshot of what the service returned:
//! constructed only through deserialization, never mutated afterwards. The
//! service owns the schema; the field names below are the only locally
//! enforced contract, and unknown keys in a response are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Error;

/// An aircraft type as described by the service.
///
/// All fields are required; a payload missing any of them fails
/// deserialization outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub name: String,
    pub manufacturer: String,
    pub r#type: String,
    pub iata_code: String,
    pub icao_code: String,
    pub passengers: u32,
    pub speed_kmh: f64,
    pub speed_kts: f64,
    pub ceiling_m: f64,
    pub ceiling_ft: f64,
    pub range_km: f64,
    pub range_nm: f64,
    pub mtow_kg: f64,
    pub mtow_lbs: f64,
    pub alias: String,
}

/// An airport record.
///
/// `municipality`, `country`, and `region` are not present in every
/// response; they deserialize to `None` when the key is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub ident: String,
    pub name: String,
    pub municipality: Option<String>,
    pub icao_code: String,
    pub country: Option<String>,
    pub region: Option<String>,
}

/// One endpoint of a route leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub id: u64,
    pub ident: String,
    pub name: String,
    pub elevation_ft: i32,
    pub icao_code: String,
    pub iata_code: String,
    pub alias: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub latitude_minsec: MinSec,
    pub longitude_minsec: MinSec,
    pub link: String,
}

/// One origin-to-destination segment of a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub distance_km: f64,
    pub distance_nm: f64,
    pub flight_time_min: f64,
    pub heading_deg: f64,
    pub heading_compass: String,
    pub origin: RoutePoint,
    pub destination: RoutePoint,
}

/// A computed route between two airports.
///
/// Carries the trip totals plus every leg the service returned, in source
/// order. A route always has at least one leg; responses without any are
/// rejected during conversion with [`Error::EmptyRoute`]. The per-field
/// accessors read the first leg, which is the whole journey for the common
/// direct-route case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub speed_kmh: f64,
    pub speed_kts: f64,
    pub legs: Vec<RouteLeg>,
}

impl Route {
    /// The first leg of the journey.
    pub fn first_leg(&self) -> &RouteLeg {
        &self.legs[0]
    }

    /// First-leg distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.first_leg().distance_km
    }

    /// First-leg distance in nautical miles.
    pub fn distance_nm(&self) -> f64 {
        self.first_leg().distance_nm
    }

    /// First-leg flight time in minutes.
    pub fn flight_time_min(&self) -> f64 {
        self.first_leg().flight_time_min
    }

    /// First-leg heading in degrees.
    pub fn heading_deg(&self) -> f64 {
        self.first_leg().heading_deg
    }

    /// First-leg heading as a compass direction, e.g. `"ENE"`.
    pub fn heading_compass(&self) -> &str {
        &self.first_leg().heading_compass
    }

    /// Departure airport of the first leg.
    pub fn origin(&self) -> &RoutePoint {
        &self.first_leg().origin
    }

    /// Arrival airport of the first leg.
    pub fn destination(&self) -> &RoutePoint {
        &self.first_leg().destination
    }
}

/// A coordinate in the service's sexagesimal (degrees/minutes/seconds)
/// string encoding, as found in the `latitude_minsec`/`longitude_minsec`
/// fields of a route point.
///
/// The encoding is carried verbatim as returned by the service; no
/// structured degrees/minutes/seconds breakdown is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinSec(String);

impl MinSec {
    /// The raw string exactly as returned by the service.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MinSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Wire shape of /airports/route responses: totals for the whole trip plus
// one JSON object per leg.
#[derive(Debug, Deserialize)]
pub(crate) struct RouteResponse {
    pub(crate) totals: RouteTotals,
    pub(crate) legs: Vec<RouteLeg>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RouteTotals {
    pub(crate) speed_kmh: f64,
    pub(crate) speed_kts: f64,
}

// Unmarshal the raw route response from the API into a Route,
// keeping every leg in source order.
impl TryFrom<RouteResponse> for Route {
    type Error = Error;

    fn try_from(raw: RouteResponse) -> Result<Self, Error> {
        if raw.legs.is_empty() {
            return Err(Error::EmptyRoute);
        }
        Ok(Route {
            speed_kmh: raw.totals.speed_kmh,
            speed_kts: raw.totals.speed_kts,
            legs: raw.legs,
        })
    }
}
