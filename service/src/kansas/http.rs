//! HTTP handlers for Kansas district lookup endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query,
    },
    routing::{get, post},
    Extension, Json, Router,
};
use census_geocode::{AddressMatch, GeocodeResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::context::AppContext;
use crate::http::{verify_key, ApiError, ErrorResponse};
use crate::kansas::geo::{self, GeoError, GeoPoint, ResolvedDistrict};
use crate::kansas::types::DistrictResponse;

/// Create the Kansas district router.
pub fn router() -> Router {
    Router::new()
        .route(
            "/api/kansas/representative/district/{district_number}",
            get(district_by_number),
        )
        .route("/api/kansas/district/address", post(district_from_census))
        .route(
            "/api/kansas/representative/coordinates",
            post(district_from_match),
        )
}

/// Query parameters carrying only the shared API key.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KeyQuery {
    /// Shared API key.
    pub key: Option<String>,
}

/// Request body wrapping a full geocoder response.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CensusLookupRequest {
    /// Geocoder response payload as returned by the Census geocoding
    /// service.
    #[serde(rename = "censusData")]
    #[schema(value_type = Option<Object>)]
    pub census_data: Option<GeocodeResponse>,
    /// Shared API key.
    pub key: Option<String>,
}

/// Request body wrapping a single pre-extracted address match.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddressMatchLookupRequest {
    /// One address match object from a geocoder response.
    #[serde(rename = "addressMatch")]
    #[schema(value_type = Option<Object>)]
    pub address_match: Option<AddressMatch>,
    /// Shared API key.
    pub key: Option<String>,
}

/// Response for a geocoder-driven district resolution.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeoDistrictResponse {
    /// Resolved district number with leading zeros dropped.
    pub district_number: String,
    pub coordinates: GeoPoint,
    pub district: DistrictResponse,
}

/// Look up a Kansas senate district by number
///
/// District numbers are compared as opaque strings against the roster,
/// so "5" and "05" are different lookups.
///
/// # Errors
///
/// Returns 400 for a missing key and 404 for a district number outside
/// the roster.
#[utoipa::path(
    get,
    path = "/api/kansas/representative/district/{district_number}",
    tag = "kansas",
    params(
        ("district_number" = String, Path, description = "Senate district number"),
        KeyQuery
    ),
    responses(
        (status = 200, description = "District detail", body = DistrictResponse),
        (status = 400, description = "Missing key", body = ErrorResponse),
        (status = 404, description = "District not in the roster", body = ErrorResponse)
    )
)]
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn district_by_number(
    Extension(context): Extension<Arc<AppContext>>,
    Path(district_number): Path<String>,
    query: Result<Query<KeyQuery>, QueryRejection>,
) -> Result<Json<DistrictResponse>, ApiError> {
    let Query(query) = query?;
    verify_key(query.key.as_deref(), &context.api_key)?;

    let response = context
        .districts
        .format_response(&district_number)
        .map_err(|err| ApiError::not_found(err.to_string()))?;

    Ok(Json(response))
}

/// Resolve a geocoder response to a senate district
///
/// Walks the payload to the first address match, reads the upper-chamber
/// district layer, and joins the result against the district roster.
///
/// # Errors
///
/// Returns 400 for a missing key or `censusData`, and 404 when no
/// district can be resolved, the payload cannot be processed, or the
/// resolved district is not in the roster.
#[utoipa::path(
    post,
    path = "/api/kansas/district/address",
    tag = "kansas",
    request_body = CensusLookupRequest,
    responses(
        (status = 200, description = "Resolved district detail", body = GeoDistrictResponse),
        (status = 400, description = "Missing key or censusData", body = ErrorResponse),
        (status = 404, description = "No district resolved", body = ErrorResponse)
    )
)]
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn district_from_census(
    Extension(context): Extension<Arc<AppContext>>,
    body: Result<Json<CensusLookupRequest>, JsonRejection>,
) -> Result<Json<GeoDistrictResponse>, ApiError> {
    let Json(request) = body?;
    verify_key(request.key.as_deref(), &context.api_key)?;

    let Some(census_data) = request.census_data else {
        return Err(ApiError::bad_request("censusData is required"));
    };

    let resolved = geo::resolve_from_response(&census_data, &context.upper_chamber_layer)
        .map_err(geo_error_response)?;

    build_geo_response(&context, &resolved)
}

/// Resolve a single address match to a senate district
///
/// Same resolution as the full-payload endpoint, for callers that have
/// already extracted one address match.
///
/// # Errors
///
/// Returns 400 for a missing key or `addressMatch`, and 404 when no
/// district can be resolved, the match cannot be processed, or the
/// resolved district is not in the roster.
#[utoipa::path(
    post,
    path = "/api/kansas/representative/coordinates",
    tag = "kansas",
    request_body = AddressMatchLookupRequest,
    responses(
        (status = 200, description = "Resolved district detail", body = GeoDistrictResponse),
        (status = 400, description = "Missing key or addressMatch", body = ErrorResponse),
        (status = 404, description = "No district resolved", body = ErrorResponse)
    )
)]
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn district_from_match(
    Extension(context): Extension<Arc<AppContext>>,
    body: Result<Json<AddressMatchLookupRequest>, JsonRejection>,
) -> Result<Json<GeoDistrictResponse>, ApiError> {
    let Json(request) = body?;
    verify_key(request.key.as_deref(), &context.api_key)?;

    let Some(address_match) = request.address_match else {
        return Err(ApiError::bad_request("addressMatch is required"));
    };

    let resolved = geo::resolve_from_match(&address_match, &context.upper_chamber_layer)
        .map_err(geo_error_response)?;

    build_geo_response(&context, &resolved)
}

/// Map resolution failures onto response statuses. Every failure mode,
/// including a payload the resolver cannot traverse, is the not-found
/// family; the messages stay distinct so callers can tell them apart.
fn geo_error_response(err: GeoError) -> ApiError {
    ApiError::not_found(err.to_string())
}

/// Join a resolved district number against the roster and assemble the
/// response.
fn build_geo_response(
    context: &AppContext,
    resolved: &ResolvedDistrict,
) -> Result<Json<GeoDistrictResponse>, ApiError> {
    let district = context
        .districts
        .format_response(&resolved.district_number)
        .map_err(|err| ApiError::not_found(err.to_string()))?;

    Ok(Json(GeoDistrictResponse {
        district_number: resolved.district_number.clone(),
        coordinates: resolved.coordinates,
        district,
    }))
}
