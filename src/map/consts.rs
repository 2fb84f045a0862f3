// Roughly the middle of the United Kingdom.
pub const DEFAULT_CENTER_LAT: f64 = 54.5;
pub const DEFAULT_CENTER_LNG: f64 = -3.0;
pub const DEFAULT_ZOOM: u8 = 5;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
