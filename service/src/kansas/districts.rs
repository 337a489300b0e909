//! Kansas senate district registry and roster loading.

use std::collections::HashMap;

use crate::kansas::types::{District, DistrictContact, DistrictResponse, DistrictRow, ShapeInfo};

pub const KANSAS_STATE_CODE: &str = "KS";
pub const KANSAS_STATE_NAME: &str = "Kansas";

/// Statehouse address used for every district until the roster carries
/// per-senator offices.
pub const DEFAULT_OFFICE_ADDRESS: &str = "300 SW 10th Ave, Topeka, KS 66612";

/// Lookup failure for a district request. The display string is the
/// client-facing error message.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DistrictLookupError {
    #[error("Invalid Kansas district number: {0}")]
    InvalidDistrict(String),
}

/// In-memory mapping of senate districts and senator contacts, keyed by
/// district number. Built once at startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct DistrictRegistry {
    districts: HashMap<String, District>,
    contacts: HashMap<String, DistrictContact>,
}

impl DistrictRegistry {
    /// Build the registry from parsed roster rows. Duplicate district
    /// numbers keep the last row.
    #[must_use]
    pub fn from_rows(rows: Vec<DistrictRow>) -> Self {
        let mut registry = Self::default();
        for row in rows {
            registry.districts.insert(
                row.district_number.clone(),
                District {
                    district_number: row.district_number.clone(),
                    representative: row.full_name.clone(),
                    // TODO: populate counties once the roster source carries them
                    counties: Vec::new(),
                    office_address: DEFAULT_OFFICE_ADDRESS.to_string(),
                },
            );
            registry.contacts.insert(
                row.district_number.clone(),
                DistrictContact {
                    name: row.name,
                    full_name: row.full_name,
                    email: row.email,
                    url: row.url,
                    district: row.district_number,
                    shape: ShapeInfo {
                        area: row.shape_area.parse().unwrap_or(f64::NAN),
                        length: row.shape_length.parse().unwrap_or(f64::NAN),
                    },
                },
            );
        }
        registry
    }

    /// Membership test on a district number. Identifiers are compared as
    /// opaque strings with no numeric coercion or zero-padding.
    #[must_use]
    pub fn contains(&self, district_number: &str) -> bool {
        self.districts.contains_key(district_number)
    }

    #[must_use]
    pub fn get(&self, district_number: &str) -> Option<&District> {
        self.districts.get(district_number)
    }

    #[must_use]
    pub fn contact(&self, district_number: &str) -> Option<&DistrictContact> {
        self.contacts.get(district_number)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.districts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// Look up a district, rejecting numbers outside the roster.
    ///
    /// # Errors
    /// Returns a `DistrictLookupError` carrying the client-facing message.
    pub fn lookup(&self, district_number: &str) -> Result<&District, DistrictLookupError> {
        self.get(district_number)
            .ok_or_else(|| DistrictLookupError::InvalidDistrict(district_number.to_string()))
    }

    /// Compose the display response for a district, joining in contact
    /// email and URL when the roster has them.
    ///
    /// # Errors
    /// Returns a `DistrictLookupError` when the district is not in the
    /// registry.
    pub fn format_response(
        &self,
        district_number: &str,
    ) -> Result<DistrictResponse, DistrictLookupError> {
        let district = self.lookup(district_number)?;
        let contact = self.contact(district_number);

        Ok(DistrictResponse {
            state: KANSAS_STATE_NAME.to_string(),
            state_code: KANSAS_STATE_CODE.to_string(),
            district_number: district.district_number.clone(),
            full_district: format!(
                "{KANSAS_STATE_NAME}'s {}{} Senate District",
                district.district_number,
                ordinal_suffix(&district.district_number)
            ),
            representative: district.representative.clone(),
            office_address: district.office_address.clone(),
            email: contact.map(|c| c.email.clone()).filter(|e| !e.is_empty()),
            url: contact.map(|c| c.url.clone()).filter(|u| !u.is_empty()),
        })
    }
}

/// English ordinal suffix for a district number. Values 4 through 20
/// take "th" ahead of the last-digit rule; non-numeric input falls back
/// to "th".
#[must_use]
pub fn ordinal_suffix(district_number: &str) -> &'static str {
    let Ok(n) = district_number.parse::<u32>() else {
        return "th";
    };
    if (4..=20).contains(&n) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Load the district roster CSV into a registry.
///
/// An unreadable file produces an empty registry and rows that fail to
/// parse are skipped, so the service stays up and answers "not found"
/// instead of crashing.
#[must_use]
pub fn load_districts(path: &str) -> DistrictRegistry {
    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(err) => {
            tracing::warn!(path, error = %err, "failed to open district roster, continuing with empty registry");
            return DistrictRegistry::default();
        }
    };

    let mut rows = Vec::new();
    for record in reader.deserialize::<DistrictRow>() {
        match record {
            Ok(row) => rows.push(row),
            Err(err) => {
                tracing::warn!(path, error = %err, "skipping malformed district roster row");
            }
        }
    }

    let registry = DistrictRegistry::from_rows(rows);
    tracing::info!(path, count = registry.len(), "loaded district roster");
    registry
}
