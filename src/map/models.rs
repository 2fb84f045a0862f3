use crate::map::consts::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL,
    DEFAULT_ZOOM,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Returns `None` unless both coordinates are finite.
    pub fn new_finite(lat: f64, lng: f64) -> Option<Self> {
        (lat.is_finite() && lng.is_finite()).then_some(Self { lat, lng })
    }
}

/// Identifies a marker by the position of its record in the loaded dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(pub usize);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
        }
    }
}

/// Initial viewport of the map page plus its single base layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub tile_layer: TileLayer,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: LatLng {
                lat: DEFAULT_CENTER_LAT,
                lng: DEFAULT_CENTER_LNG,
            },
            zoom: DEFAULT_ZOOM,
            tile_layer: TileLayer::default(),
        }
    }
}
