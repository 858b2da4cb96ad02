// responses/image.rs
use crate::client::images::FetchedImage;
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

// Shown whenever a listing image is missing or its fetch failed.
const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="200"><rect width="300" height="200" fill="#e5e7eb"/><text x="150" y="104" text-anchor="middle" font-family="sans-serif" font-size="14" fill="#6b7280">Image not available</text></svg>"##;

/// Pass a proxied listing image through with its upstream content type.
pub fn image_response(image: FetchedImage) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", image.content_type)
        .header("Cache-Control", "max-age=3600")
        .body(Body::from(image.bytes))
        .map_err(|_| ServerError::InternalError)
}

/// The built-in placeholder. Served with 200 so a broken upstream image
/// never shows as a broken tile.
pub fn placeholder_response() -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "image/svg+xml")
        .body(Body::from(PLACEHOLDER_SVG.to_string()))
        .map_err(|_| ServerError::InternalError)
}
