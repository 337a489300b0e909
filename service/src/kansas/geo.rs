//! Geocoder payload resolution to a senate district.
//!
//! Payloads follow the Census geocoder response shape modeled by the
//! `census-geocode` crate. Resolution is pure traversal over a payload
//! the caller already holds; no network requests are made here.

use census_geocode::{AddressMatch, GeocodeResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Geographic coordinates of a resolved address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Outcome of resolving a geocoder payload.
#[derive(Debug, Clone)]
pub struct ResolvedDistrict {
    /// District number with leading zeros dropped.
    pub district_number: String,
    pub coordinates: GeoPoint,
}

/// Resolution failures. The display strings are the client-facing error
/// messages.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("No address match found in Census data")]
    NoAddressMatch,

    #[error("No Kansas legislative district found for this address")]
    DistrictUnavailable,

    #[error("Failed to process Kansas district geographical data")]
    Processing,
}

/// Resolve a full geocoder response.
///
/// Takes the first address match unconditionally; multiple matches are
/// not ranked or disambiguated.
///
/// # Errors
/// Returns `Processing` for a payload without a result envelope and
/// `NoAddressMatch` when the match list is empty.
pub fn resolve_from_response(
    response: &GeocodeResponse,
    upper_chamber_layer: &str,
) -> Result<ResolvedDistrict, GeoError> {
    let Some(result) = response.result.as_ref() else {
        tracing::warn!("geocoder payload carries no result envelope");
        return Err(GeoError::Processing);
    };

    let Some(address_match) = result.address_matches.first() else {
        return Err(GeoError::NoAddressMatch);
    };

    resolve_from_match(address_match, upper_chamber_layer)
}

/// Resolve a single address match.
///
/// The district code is parsed as an integer and formatted back, which
/// drops leading zeros ("07" resolves to district "7"). Coordinates
/// come from the geocoder's (x, y) pair, where x is longitude and y is
/// latitude.
///
/// # Errors
/// Returns `DistrictUnavailable` when the upper-chamber layer is absent,
/// empty, or carries an unreadable district code, and `Processing` when
/// the match has no coordinate pair.
pub fn resolve_from_match(
    address_match: &AddressMatch,
    upper_chamber_layer: &str,
) -> Result<ResolvedDistrict, GeoError> {
    let Some(geography) = address_match.layer(upper_chamber_layer).first() else {
        return Err(GeoError::DistrictUnavailable);
    };

    let Some(number) = geography
        .sldu
        .as_deref()
        .and_then(|code| code.parse::<u32>().ok())
    else {
        return Err(GeoError::DistrictUnavailable);
    };

    let Some(coordinates) = address_match.coordinates.as_ref() else {
        tracing::warn!("address match carries no coordinate pair");
        return Err(GeoError::Processing);
    };

    Ok(ResolvedDistrict {
        district_number: number.to_string(),
        coordinates: GeoPoint {
            lat: coordinates.y,
            lng: coordinates.x,
        },
    })
}
