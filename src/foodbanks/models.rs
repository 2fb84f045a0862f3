use crate::map::models::LatLng;
use serde::{Deserialize, Serialize};

/// A food bank as displayed on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodBankRecord {
    pub name: String,
    pub location_name: String,
    pub url: String,
    pub shopping_list_url: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub postcode: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub network: String,
}

impl FoodBankRecord {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lon,
        }
    }
}

/// One element of the Give Food `foodbanks` listing. Only the fields the map
/// uses are read; every one of them may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GiveFoodEntry {
    pub name: Option<String>,
    pub alt_name: Option<String>,
    pub urls: Option<GiveFoodUrls>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub lat_lng: Option<String>,
    pub network: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GiveFoodUrls {
    pub homepage: Option<String>,
    pub shopping_list: Option<String>,
}

/// One element of a local dataset, already in [`FoodBankRecord`] shape.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LocalFoodBankEntry {
    pub name: Option<String>,
    pub location_name: Option<String>,
    pub url: Option<String>,
    pub shopping_list_url: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub network: Option<String>,
}
