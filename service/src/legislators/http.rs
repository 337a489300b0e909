//! HTTP handlers for legislator lookup endpoints.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::context::AppContext;
use crate::http::{verify_key, ApiError, ErrorResponse};
use crate::legislators::matcher::find_by_name;
use crate::legislators::types::{Bio, Ids, Legislator, Name, Term};

/// Create the legislator lookup router.
pub fn router() -> Router {
    Router::new()
        .route("/api/legislator", get(lookup_legislator))
        .route("/api/legislators/addresses", post(batch_addresses))
}

/// Query parameters for single legislator lookup.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LegislatorQuery {
    /// Free-text legislator name.
    pub name: Option<String>,
    /// Shared API key.
    pub key: Option<String>,
}

/// Request body for batch address lookup.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddressBatchRequest {
    /// Names to resolve. Loosely typed so a missing or non-array value
    /// reports the same validation message regardless of shape.
    #[schema(value_type = Option<Vec<String>>)]
    pub names: Option<Value>,
    /// Shared API key.
    pub key: Option<String>,
}

/// One entry in the batch address response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LegislatorAddress {
    /// Display name of the matched legislator, or the input name when
    /// no match was found.
    pub name: String,
    #[serde(rename = "officeAddress", skip_serializing_if = "Option::is_none")]
    pub office_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Full legislator detail response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LegislatorDetail {
    pub name: Name,
    pub bio: Bio,
    pub ids: Ids,
    pub current_role: CurrentRole,
    pub all_terms: Vec<Term>,
}

/// The currently-served role, projected from the last term.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentRole {
    #[serde(rename = "type")]
    pub role_type: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<u32>,
    pub party: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_rank: Option<String>,
}

impl From<&Term> for CurrentRole {
    fn from(term: &Term) -> Self {
        Self {
            role_type: term.term_type.clone(),
            state: term.state.clone(),
            district: term.district,
            party: term.party.clone(),
            start: term.start,
            end: term.end,
            url: term.url.clone(),
            address: term.address.clone(),
            phone: term.phone.clone(),
            contact_form: term.contact_form.clone(),
            office: term.office.clone(),
            state_rank: term.state_rank.clone(),
        }
    }
}

/// Look up a single legislator by name
///
/// Resolves a free-text name against the loaded roster and returns the
/// full record with its current role.
///
/// # Errors
///
/// Returns 400 for a missing key or name, 404 when no roster entry
/// matches, and 500 for a malformed roster record.
#[utoipa::path(
    get,
    path = "/api/legislator",
    tag = "legislators",
    params(LegislatorQuery),
    responses(
        (status = 200, description = "Matching legislator found", body = LegislatorDetail),
        (status = 400, description = "Missing key or name parameter", body = ErrorResponse),
        (status = 404, description = "No legislator matches the name", body = ErrorResponse),
        (status = 500, description = "Malformed roster record", body = ErrorResponse)
    )
)]
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn lookup_legislator(
    Extension(context): Extension<Arc<AppContext>>,
    query: Result<Query<LegislatorQuery>, QueryRejection>,
) -> Result<Json<LegislatorDetail>, ApiError> {
    let Query(query) = query?;
    verify_key(query.key.as_deref(), &context.api_key)?;

    let name = match query.name.as_deref() {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ApiError::bad_request("Name parameter is required")),
    };

    let Some(legislator) = find_by_name(&context.legislators, name) else {
        return Err(ApiError::not_found(format!(
            "No legislator found with name: {name}"
        )));
    };

    let Some(current_term) = legislator.current_term() else {
        tracing::error!(name, bioguide = %legislator.id.bioguide, "roster record has no terms");
        return Err(ApiError::internal("Error finding legislator"));
    };

    Ok(Json(LegislatorDetail {
        name: legislator.name.clone(),
        bio: legislator.bio.clone(),
        ids: legislator.id.clone(),
        current_role: CurrentRole::from(current_term),
        all_terms: legislator.terms.clone(),
    }))
}

/// Resolve office addresses for a batch of names
///
/// Each name resolves independently; failures are reported per element
/// without aborting the batch. Response order matches input order.
///
/// # Errors
///
/// Returns 400 for a missing key or when `names` is not an array of strings.
#[utoipa::path(
    post,
    path = "/api/legislators/addresses",
    tag = "legislators",
    request_body = AddressBatchRequest,
    responses(
        (status = 200, description = "Per-name resolution results", body = [LegislatorAddress]),
        (status = 400, description = "Missing key or malformed names array", body = ErrorResponse)
    )
)]
#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn batch_addresses(
    Extension(context): Extension<Arc<AppContext>>,
    body: Result<Json<AddressBatchRequest>, JsonRejection>,
) -> Result<Json<Vec<LegislatorAddress>>, ApiError> {
    let Json(request) = body?;
    verify_key(request.key.as_deref(), &context.api_key)?;

    let Some(names) = request.names.as_ref().and_then(Value::as_array) else {
        return Err(ApiError::bad_request("Names must be provided as an array"));
    };
    let Some(names) = names.iter().map(Value::as_str).collect::<Option<Vec<_>>>() else {
        return Err(ApiError::bad_request("Names must be provided as an array"));
    };

    let addresses = names
        .into_iter()
        .map(|name| resolve_address(&context.legislators, name))
        .collect();

    Ok(Json(addresses))
}

/// Resolve one batch entry. Not-found and malformed records become error
/// entries so the rest of the batch still resolves.
fn resolve_address(roster: &[Legislator], name: &str) -> LegislatorAddress {
    let Some(legislator) = find_by_name(roster, name) else {
        return LegislatorAddress {
            name: name.to_string(),
            office_address: None,
            error: Some(format!("No legislator found with name: {name}")),
        };
    };

    let Some(current_term) = legislator.current_term() else {
        tracing::error!(name, bioguide = %legislator.id.bioguide, "roster record has no terms");
        return LegislatorAddress {
            name: name.to_string(),
            office_address: None,
            error: Some("Error finding legislator".to_string()),
        };
    };

    LegislatorAddress {
        name: legislator.display_name(),
        office_address: Some(
            current_term
                .address
                .clone()
                .unwrap_or_else(|| "No office address available".to_string()),
        ),
        error: None,
    }
}
