// src/domain/document.rs

use crate::client::models::RawDocument;
use serde_json::Value;

/// One property listing, normalized and ready for faceting, filtering and
/// rendering. This acts as an anti-corruption layer between the raw service
/// response and the rest of the app: every default is applied exactly once
/// here, so downstream code can read fields without re-checking for missing
/// data.
#[derive(Debug, PartialEq, Clone)]
pub struct ResultDocument {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,

    /// Listing price in whole dollars. 0 means "unknown"; unknown prices are
    /// excluded from facet price-bound computation.
    pub price: i64,

    /// The service sends bedrooms/bathrooms as either a string or a number,
    /// so these are kept in rendered form.
    pub bedrooms: String,
    pub bathrooms: String,

    pub home_type: String,
    pub image_url: Option<String>,
    pub listing_url: String,
}

impl ResultDocument {
    /// Builds a normalized document from the raw wire model, applying the
    /// documented default for every missing or empty field.
    pub fn from_raw(raw: RawDocument) -> Self {
        ResultDocument {
            street_address: text_or(raw.streetaddress, "Unknown Address"),
            city: text_or(raw.city, "Unknown City"),
            state: text_or(raw.state, "Unknown State"),
            zipcode: text_or(raw.zipcode, "Unknown Zipcode"),
            price: raw
                .price
                .map(|p| p as i64)
                .filter(|p| *p >= 0)
                .unwrap_or(0),
            bedrooms: count_or_na(raw.bedrooms),
            bathrooms: count_or_na(raw.bathrooms),
            home_type: text_or(raw.hometype, "Unknown Type"),
            image_url: raw.img_src.filter(|s| !s.is_empty()),
            listing_url: text_or(raw.url, "#"),
        }
    }
}

fn text_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

// Bedroom/bathroom counts arrive as "3", 3, or 3.5 depending on the listing.
fn count_or_na(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => "N/A".to_string(),
    }
}
