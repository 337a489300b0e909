//! Kansas district roster types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the district roster CSV, named after its header columns.
///
/// Shape geometry arrives as strings and is parsed leniently when the
/// registry is built; an unreadable value becomes NaN instead of
/// discarding the row.
#[derive(Debug, Clone, Deserialize)]
pub struct DistrictRow {
    #[serde(rename = "FID")]
    pub fid: String,
    #[serde(rename = "DISTRICT")]
    pub district_code: String,
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "FULLNAME")]
    pub full_name: String,
    #[serde(rename = "EMAIL")]
    pub email: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "DISTRICT_N")]
    pub district_number: String,
    #[serde(rename = "Shape__Area")]
    pub shape_area: String,
    #[serde(rename = "Shape__Length")]
    pub shape_length: String,
}

/// A senate district as served by the lookup endpoints.
#[derive(Debug, Clone)]
pub struct District {
    /// District number as an opaque string, matching the roster key.
    pub district_number: String,
    pub representative: String,
    pub counties: Vec<String>,
    pub office_address: String,
}

/// Contact side-table entry for a district's senator.
#[derive(Debug, Clone)]
pub struct DistrictContact {
    pub name: String,
    pub full_name: String,
    pub email: String,
    pub url: String,
    pub district: String,
    pub shape: ShapeInfo,
}

/// Shape geometry carried through from the roster. No lookup logic
/// reads these values.
#[derive(Debug, Clone, Copy)]
pub struct ShapeInfo {
    pub area: f64,
    pub length: f64,
}

/// District detail response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResponse {
    pub state: String,
    pub state_code: String,
    pub district_number: String,
    /// Display label of the form "Kansas's 5th Senate District".
    pub full_district: String,
    pub representative: String,
    pub office_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
