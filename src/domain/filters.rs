// src/domain/filters.rs

use crate::domain::document::ResultDocument;
use crate::domain::facets::{Facets, DEFAULT_PRICE_BOUNDS};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Zipcode selection is a two-state toggle, not a cached set snapshot.
/// `All` places no constraint, so facets regenerated by a new fetch are
/// automatically fully included; `Explicit` is the user's frozen subset and
/// does not follow facet changes.
#[derive(Debug, Clone, PartialEq)]
pub enum ZipcodeSelection {
    All,
    Explicit(BTreeSet<String>),
}

impl ZipcodeSelection {
    pub fn allows(&self, zipcode: &str) -> bool {
        match self {
            ZipcodeSelection::All => true,
            ZipcodeSelection::Explicit(selected) => selected.contains(zipcode),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ZipcodeSelection::All)
    }
}

/// The user's active filter choices for one query cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub price_range: (i64, i64),
    pub zipcodes: ZipcodeSelection,
    pub home_types: BTreeSet<String>,
    pub sort: SortOrder,
}

impl Default for FilterSelection {
    fn default() -> Self {
        FilterSelection {
            price_range: DEFAULT_PRICE_BOUNDS,
            zipcodes: ZipcodeSelection::All,
            home_types: BTreeSet::new(),
            sort: SortOrder::Ascending,
        }
    }
}

impl FilterSelection {
    /// Initial selection after a fetch: the full price bounds, every zipcode
    /// (via the `All` toggle) and every home type.
    pub fn from_facets(facets: &Facets) -> Self {
        FilterSelection {
            price_range: facets.price_bounds,
            zipcodes: ZipcodeSelection::All,
            home_types: facets.home_types.clone(),
            sort: SortOrder::Ascending,
        }
    }
}

/// Applies the active filters to a result set and sorts by price.
///
/// Pure and total: malformed data was already normalized away at ingestion,
/// so this never fails. The sort is stable, which keeps documents with equal
/// prices in response order. Documents with an unknown price (0) pass the
/// price predicate only when the selected floor is 0; there is no special
/// case beyond the numeric comparison.
pub fn apply(results: &[ResultDocument], filters: &FilterSelection) -> Vec<ResultDocument> {
    let (min_price, max_price) = filters.price_range;

    let mut kept: Vec<ResultDocument> = results
        .iter()
        .filter(|d| min_price <= d.price && d.price <= max_price)
        .filter(|d| filters.zipcodes.allows(&d.zipcode))
        .filter(|d| filters.home_types.contains(&d.home_type))
        .cloned()
        .collect();

    match filters.sort {
        SortOrder::Ascending => kept.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::Descending => kept.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    kept
}
