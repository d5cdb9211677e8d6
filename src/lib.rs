//! A typed client for the Great Circle Mapper flight and airport API.
//!
//! The service (hosted on RapidAPI) answers airport lookups, aircraft type
//! lookups, free-text airport searches, and great-circle route calculations
//! between two airports. This crate wraps those endpoints behind [`Client`]:
//! every operation performs a single GET request, deserializes a 200
//! response into one of the record types in [`models`], and reports any
//! other status as an absent result.
//!
//! ```no_run
//! use circlemapper::Client;
//!
//! #[tokio::main]
//! async fn main() -> circlemapper::Result<()> {
//!     let client = Client::from_env()?;
//!
//!     if let Some(airport) = client.fetch_airport("KJFK").await? {
//!         println!("{}: {}", airport.ident, airport.name);
//!     }
//!
//!     if let Some(route) = client.compute_route(450.0, "kadg", "kjfk").await? {
//!         println!(
//!             "{} km, heading {} ({} legs)",
//!             route.distance_km(),
//!             route.heading_compass(),
//!             route.legs.len()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Authentication is a RapidAPI key supplied by the caller: directly via
//! [`Client::new`], through the `CIRCLEMAPPER_API_KEY` environment variable
//! ([`Client::from_env`]), or from a `circlemapper.toml` file
//! ([`Config::load`]). No key ships with the crate.

mod client;
mod config;
mod error;
pub mod models;

pub use client::Client;
pub use config::{Config, CONFIG_FILE, DEFAULT_BASE_URL, ENV_API_KEY, ENV_BASE_URL};
pub use error::{Error, Result};
pub use models::{Aircraft, Airport, MinSec, Route, RouteLeg, RoutePoint};
