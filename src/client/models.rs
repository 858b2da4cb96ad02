use serde::Deserialize;
use serde_json::Value;

// response
//  ├── status        ("error" on application failures)
//  ├── message
//  ├── summary
//  └── properties[]
//       └── document
//            ├── streetaddress / city / state / zipcode
//            ├── price / bedrooms / bathrooms / hometype
//            └── imgSrc / url

/// Top-level inference service response. Success and error payloads share one
/// shape; `status == "error"` marks the latter.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub properties: Vec<PropertyEnvelope>,
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PropertyEnvelope {
    pub document: Option<RawDocument>,
}

/// One property exactly as the service sends it. Every field is optional;
/// normalization happens in `ResultDocument::from_raw`.
#[derive(Debug, Default, Deserialize)]
pub struct RawDocument {
    pub streetaddress: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub price: Option<f64>,
    // String or number depending on the listing.
    pub bedrooms: Option<Value>,
    pub bathrooms: Option<Value>,
    pub hometype: Option<String>,
    #[serde(rename = "imgSrc")]
    pub img_src: Option<String>,
    pub url: Option<String>,
}
