//! Name normalization and roster matching.

use crate::legislators::types::Legislator;

/// Normalize a name for comparison: lower-case, then keep only ASCII
/// letters and digits. Diacritics are stripped, not transliterated.
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Find a legislator by name.
///
/// The query is normalized once, then compared against three forms per
/// record: "first last", the official full form, and "nickname last".
/// The roster is scanned in load order and the first record with any
/// matching form wins.
#[must_use]
pub fn find_by_name<'a>(roster: &'a [Legislator], query: &str) -> Option<&'a Legislator> {
    let target = normalize(query);

    roster.iter().find(|legislator| {
        let name = &legislator.name;

        if normalize(&format!("{} {}", name.first, name.last)) == target {
            return true;
        }
        if name
            .official_full
            .as_deref()
            .is_some_and(|full| normalize(full) == target)
        {
            return true;
        }
        name.nickname
            .as_deref()
            .is_some_and(|nick| normalize(&format!("{} {}", nick, name.last)) == target)
    })
}
