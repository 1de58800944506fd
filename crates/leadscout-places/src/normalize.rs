//! Merges a search hit with its (possibly absent) detail lookup into one
//! [`NormalizedRecord`].
//!
//! Every field follows the same precedence: the detail value when present and
//! non-empty, then the summary value, then a sentinel or absence.

use crate::types::{Coordinates, EntityDetail, NormalizedRecord, SearchSummary};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_ADDRESS: &str = "Address unavailable";

/// Builds the map-search link used when the detail lookup supplied no canonical URL.
#[must_use]
pub fn map_search_url(coordinates: Coordinates, place_id: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}&query_place_id={place_id}",
        coordinates.lat, coordinates.lng
    )
}

#[must_use]
pub fn normalize_record(
    summary: &SearchSummary,
    detail: Option<&EntityDetail>,
) -> NormalizedRecord {
    let name = detail_text(detail, |d| d.name.as_deref())
        .or_else(|| non_empty(summary.name.as_deref()))
        .unwrap_or(UNKNOWN_NAME);
    let address = detail_text(detail, |d| d.address.as_deref())
        .or_else(|| non_empty(summary.address.as_deref()))
        .unwrap_or(UNKNOWN_ADDRESS);
    let phone = detail_text(detail, |d| d.phone1.as_deref())
        .or_else(|| detail_text(detail, |d| d.phone2.as_deref()));
    let website = detail_text(detail, |d| d.website.as_deref());
    let status = detail_text(detail, |d| d.status.as_deref())
        .or_else(|| non_empty(summary.status.as_deref()));

    let coordinates = detail.and_then(|d| d.coordinates).or(summary.coordinates);

    let map_url = detail_text(detail, |d| d.canonical_url.as_deref())
        .map(str::to_owned)
        .or_else(|| coordinates.map(|c| map_search_url(c, &summary.id)));

    let categories = detail
        .and_then(|d| non_empty_list(d.categories.as_ref()))
        .or_else(|| non_empty_list(summary.categories.as_ref()))
        .cloned();

    NormalizedRecord {
        name: name.to_owned(),
        address: address.to_owned(),
        phone: phone.map(str::to_owned),
        map_url,
        website: website.map(str::to_owned),
        coordinates,
        status: status.map(str::to_owned),
        categories,
    }
}

fn detail_text<'a>(
    detail: Option<&'a EntityDetail>,
    pick: impl Fn(&'a EntityDetail) -> Option<&'a str>,
) -> Option<&'a str> {
    detail.and_then(|d| non_empty(pick(d)))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty_list(value: Option<&Vec<String>>) -> Option<&Vec<String>> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
