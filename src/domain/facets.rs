// src/domain/facets.rs

use crate::domain::document::ResultDocument;
use std::collections::BTreeSet;

/// Fallback price bounds when a result set has no positive prices.
pub const DEFAULT_PRICE_BOUNDS: (i64, i64) = (0, 2_000_000);

/// Selectable filter values derived from one result set.
#[derive(Debug, Clone, PartialEq)]
pub struct Facets {
    pub zipcodes: BTreeSet<String>,
    pub home_types: BTreeSet<String>,
    /// (min, max) over documents with price > 0.
    pub price_bounds: (i64, i64),
}

impl Default for Facets {
    fn default() -> Self {
        Facets {
            zipcodes: BTreeSet::new(),
            home_types: BTreeSet::new(),
            price_bounds: DEFAULT_PRICE_BOUNDS,
        }
    }
}

/// Derives the facets for a result set. Pure; the `BTreeSet` collection makes
/// the output independent of document order and sorted for display. Documents
/// with an unknown price (0) do not participate in the price bounds.
pub fn extract(results: &[ResultDocument]) -> Facets {
    let zipcodes = results.iter().map(|d| d.zipcode.clone()).collect();
    let home_types = results.iter().map(|d| d.home_type.clone()).collect();

    let mut bounds = None;
    for price in results.iter().map(|d| d.price).filter(|p| *p > 0) {
        bounds = match bounds {
            None => Some((price, price)),
            Some((min, max)) => Some((min.min(price), max.max(price))),
        };
    }

    Facets {
        zipcodes,
        home_types,
        price_bounds: bounds.unwrap_or(DEFAULT_PRICE_BOUNDS),
    }
}
