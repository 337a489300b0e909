//! Legislator roster record types.
//!
//! Field names mirror the roster document so the records deserialize
//! directly with `serde_yaml`. Unknown document fields are ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One legislator entry from the roster document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Legislator {
    pub id: Ids,
    pub name: Name,
    pub bio: Bio,
    /// Terms served, oldest first. The last entry is the current term.
    #[serde(default)]
    pub terms: Vec<Term>,
}

impl Legislator {
    /// The term currently being served, `None` for a malformed record
    /// with an empty term sequence.
    #[must_use]
    pub fn current_term(&self) -> Option<&Term> {
        self.terms.last()
    }

    /// Preferred display name: the official full form when present,
    /// otherwise "first last".
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.official_full.clone().unwrap_or_else(|| {
            format!("{} {}", self.name.first, self.name.last)
        })
    }
}

/// Stable external identifiers for a legislator.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Ids {
    pub bioguide: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fec: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub govtrack: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikipedia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikidata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_entity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ballotpedia: Option<String>,
}

/// Name block. `first` and `last` are always present in the roster.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Name {
    pub first: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    pub last: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_full: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Biographical block.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Bio {
    pub gender: String,
    pub birthday: NaiveDate,
}

/// One term of office.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Term {
    /// Office type, `"sen"` or `"rep"` in current rosters.
    #[serde(rename = "type")]
    pub term_type: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub state: String,
    /// House district number. Absent for senate terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<u32>,
    pub party: String,
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
    /// Senate seniority, `"junior"` or `"senior"`. Absent for house terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_rank: Option<String>,
}
