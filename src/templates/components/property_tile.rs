use crate::domain::document::ResultDocument;
use maud::{html, Markup};
use url::form_urlencoded;

pub fn property_tile(document: &ResultDocument) -> Markup {
    html! {
        div class="property-tile" {
            img src=(image_href(document)) alt=(document.street_address) width="300" height="200";
            p { strong { (document.street_address) } }
            p { (document.city) ", " (document.state) " " (document.zipcode) }
            @if document.price > 0 {
                p { "Price: $" (document.price) }
            } @else {
                p { "Price: N/A" }
            }
            p { "Bedrooms: " (document.bedrooms) ", Bathrooms: " (document.bathrooms) }
            p { "Type: " (document.home_type) }
            p { a href=(document.listing_url) { "View on Zillow" } }
        }
    }
}

// Tiles never embed the upstream URL directly; the proxy absorbs failures
// and serves the placeholder when there is no image at all.
fn image_href(document: &ResultDocument) -> String {
    match &document.image_url {
        Some(src) => {
            let query: String = form_urlencoded::Serializer::new(String::new())
                .append_pair("src", src)
                .finish();
            format!("/image?{query}")
        }
        None => "/image".to_string(),
    }
}
