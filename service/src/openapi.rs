//! `OpenAPI` documentation for the lookup API.

// The OpenApi derive macro generates code that triggers this lint
#![allow(clippy::needless_for_each)]

use utoipa::OpenApi;

use crate::http::ErrorResponse;
use crate::kansas::geo::GeoPoint;
use crate::kansas::http::{AddressMatchLookupRequest, CensusLookupRequest, GeoDistrictResponse};
use crate::kansas::types::DistrictResponse;
use crate::legislators::http::{
    AddressBatchRequest, CurrentRole, LegislatorAddress, LegislatorDetail,
};
use crate::legislators::types::{Bio, Ids, Name, Term};

/// `OpenAPI` documentation for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CivicLookup API",
        version = "1.0.0",
        description = "Legislator and Kansas senate district lookup API",
        license(name = "MIT")
    ),
    paths(
        crate::legislators::http::lookup_legislator,
        crate::legislators::http::batch_addresses,
        crate::kansas::http::district_by_number,
        crate::kansas::http::district_from_census,
        crate::kansas::http::district_from_match
    ),
    components(schemas(
        ErrorResponse,
        LegislatorDetail,
        CurrentRole,
        LegislatorAddress,
        AddressBatchRequest,
        Name,
        Bio,
        Ids,
        Term,
        DistrictResponse,
        GeoDistrictResponse,
        GeoPoint,
        CensusLookupRequest,
        AddressMatchLookupRequest
    ))
)]
pub struct ApiDoc;
