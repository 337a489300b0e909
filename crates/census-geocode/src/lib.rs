//! Typed models for US Census Bureau geocoder responses.
//!
//! The geocoder's `geographies` endpoint returns an envelope of candidate
//! address matches. Each match carries the interpolated point coordinates
//! and a map of geography layers keyed by layer name (for example
//! `"2024 State Legislative Districts - Upper"`). Only the fields consumers
//! of this crate read are modeled; everything else in the payload is
//! ignored during deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level geocoder response envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeResponse {
    /// Result payload. Absent when the geocoder rejected the request
    /// outright.
    pub result: Option<GeocodeResult>,
}

/// Result payload carrying zero or more candidate matches for the input
/// address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeocodeResult {
    #[serde(rename = "addressMatches", default)]
    pub address_matches: Vec<AddressMatch>,
}

/// A single candidate match for the input address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressMatch {
    /// The normalized address string the geocoder matched against.
    #[serde(rename = "matchedAddress")]
    pub matched_address: Option<String>,

    /// Interpolated point for the match.
    pub coordinates: Option<Coordinates>,

    /// Geography layers keyed by layer name. Only present on responses
    /// from the `geographies` endpoint; plain `locations` responses
    /// deserialize with an empty map.
    #[serde(default)]
    pub geographies: HashMap<String, Vec<Geography>>,
}

/// Point coordinates in the geocoder's axis convention:
/// `x` is longitude and `y` is latitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// One geography entry within a layer.
///
/// The geocoder emits many more attributes per entry than are modeled
/// here; all fields are optional because the attribute set varies by
/// layer type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Geography {
    #[serde(rename = "GEOID")]
    pub geoid: Option<String>,

    #[serde(rename = "NAME")]
    pub name: Option<String>,

    /// Upper-chamber state legislative district code, zero-padded
    /// (e.g. `"007"`).
    #[serde(rename = "SLDU")]
    pub sldu: Option<String>,

    /// State FIPS code.
    #[serde(rename = "STATE")]
    pub state: Option<String>,
}

impl GeocodeResponse {
    /// First candidate match in the result, if any.
    #[must_use]
    pub fn first_match(&self) -> Option<&AddressMatch> {
        self.result
            .as_ref()
            .and_then(|result| result.address_matches.first())
    }
}

impl AddressMatch {
    /// Entries for a geography layer by name.
    ///
    /// A missing layer yields an empty slice rather than an error so
    /// callers can treat "layer absent" and "layer empty" uniformly.
    #[must_use]
    pub fn layer(&self, name: &str) -> &[Geography] {
        self.geographies.get(name).map_or(&[], Vec::as_slice)
    }
}
