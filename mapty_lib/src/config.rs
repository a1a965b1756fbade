use serde::Deserialize;

use crate::workout::Coords;

pub const STORAGE_KEY: &str = "workouts";
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;
pub const MAP_ZOOM: f64 = 13.;
pub const PAN_DURATION_SECS: f64 = 1.;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub storage_key: String,
    pub map: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.into(),
            map: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    pub zoom: f64,
    pub pan_duration_secs: f64,
    /// Where to open the map when the user's position is unknown.
    /// `None` leaves the map unloaded.
    pub fallback_center: Option<Coords>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: TILE_URL.into(),
            attribution: ATTRIBUTION.into(),
            zoom: MAP_ZOOM,
            pan_duration_secs: PAN_DURATION_SECS,
            fallback_center: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
