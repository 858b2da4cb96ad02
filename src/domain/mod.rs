pub mod document;
pub mod facets;
pub mod filters;
