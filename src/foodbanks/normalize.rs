//! Turns raw source entries into [`FoodBankRecord`]s.
//!
//! Entries that can't be placed on the map (no finite coordinates) are
//! dropped here, so everything past this module has a usable position.

use crate::foodbanks::models::{FoodBankRecord, GiveFoodEntry, LocalFoodBankEntry};
use crate::map::models::LatLng;

/// Normalizes a Give Food API listing, skipping entries that aren't objects
/// of the expected shape and entries without coordinates.
pub fn normalize_give_food(entries: Vec<serde_json::Value>) -> Vec<FoodBankRecord> {
    let total = entries.len();
    let records: Vec<_> = entries
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, value)| match serde_json::from_value::<GiveFoodEntry>(value) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(index, error = %err, "Skipping malformed food bank entry.");
                    None
                }
            },
        )
        .filter_map(from_give_food)
        .collect();
    tracing::info!(
        total,
        kept = records.len(),
        "Normalized Give Food entries."
    );
    records
}

/// Normalizes a local dataset. Malformed entries and entries without
/// coordinates are skipped.
pub fn normalize_local(entries: Vec<serde_json::Value>) -> Vec<FoodBankRecord> {
    let total = entries.len();
    let records: Vec<_> = entries
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, value)| match serde_json::from_value::<LocalFoodBankEntry>(value) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(index, error = %err, "Skipping malformed local food bank entry.");
                    None
                }
            },
        )
        .filter_map(from_local)
        .collect();
    if records.len() < total {
        tracing::warn!(
            dropped = total - records.len(),
            "Dropped local entries that were malformed or had no usable coordinates."
        );
    }
    records
}

pub fn from_give_food(entry: GiveFoodEntry) -> Option<FoodBankRecord> {
    let position = entry.lat_lng.as_deref().and_then(parse_lat_lng)?;
    let (url, shopping_list_url) = match entry.urls {
        Some(urls) => (
            urls.homepage.unwrap_or_default(),
            urls.shopping_list.unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };
    Some(FoodBankRecord {
        name: entry.name.unwrap_or_default(),
        location_name: entry.alt_name.unwrap_or_default(),
        url,
        shopping_list_url,
        phone: entry.phone.unwrap_or_default(),
        email: entry.email.unwrap_or_default(),
        address: normalize_address(entry.address.as_deref().unwrap_or_default()),
        postcode: entry.postcode.unwrap_or_default(),
        country: entry.country.unwrap_or_default(),
        lat: position.lat,
        lon: position.lng,
        network: entry.network.unwrap_or_default(),
    })
}

pub fn from_local(entry: LocalFoodBankEntry) -> Option<FoodBankRecord> {
    let position = LatLng::new_finite(entry.lat?, entry.lon?)?;
    Some(FoodBankRecord {
        name: entry.name.unwrap_or_default(),
        location_name: entry.location_name.unwrap_or_default(),
        url: entry.url.unwrap_or_default(),
        shopping_list_url: entry.shopping_list_url.unwrap_or_default(),
        phone: entry.phone.unwrap_or_default(),
        email: entry.email.unwrap_or_default(),
        address: entry.address.unwrap_or_default(),
        postcode: entry.postcode.unwrap_or_default(),
        country: entry.country.unwrap_or_default(),
        lat: position.lat,
        lon: position.lng,
        network: entry.network.unwrap_or_default(),
    })
}

/// Parses a combined `"lat,lon"` string. Both values must be finite numbers;
/// anything after the second comma is ignored.
pub fn parse_lat_lng(raw: &str) -> Option<LatLng> {
    let mut parts = raw.split(',');
    let lat = parts.next()?.trim().parse::<f64>().ok()?;
    let lng = parts.next()?.trim().parse::<f64>().ok()?;
    LatLng::new_finite(lat, lng)
}

/// Joins address lines with `", "`.
pub fn normalize_address(address: &str) -> String {
    address.replace("\r\n", ", ").replace('\n', ", ")
}
