// src/geos.rs

use crate::errors::ServerError;
use serde::Deserialize;
use std::fs;

/// One record of the static city/state catalog file.
#[derive(Debug, Deserialize)]
pub struct CityEntry {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

/// Loads the catalog shown in the "available cities" dropdown. Purely
/// informational; it does not constrain queries. Read once at boot, so a bad
/// file fails startup rather than a request.
pub fn load_city_catalog(path: &str) -> Result<Vec<String>, ServerError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ServerError::CatalogError(format!("read {path} failed: {e}")))?;

    let entries: Vec<CityEntry> = serde_json::from_str(&raw)
        .map_err(|e| ServerError::CatalogError(format!("parse {path} failed: {e}")))?;

    Ok(city_state_options(&entries))
}

/// Combines entries into sorted, deduplicated "City, State" strings,
/// skipping records with a blank half.
pub fn city_state_options(entries: &[CityEntry]) -> Vec<String> {
    let mut options: Vec<String> = entries
        .iter()
        .filter(|e| !e.city.is_empty() && !e.state.is_empty())
        .map(|e| format!("{}, {}", e.city, e.state))
        .collect();

    options.sort();
    options.dedup();
    options
}
