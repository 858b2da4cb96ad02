use maud::{html, Markup};

/// Shown until a query has produced results.
pub fn welcome_card() -> Markup {
    html! {
        section class="card" {
            h2 { "Welcome to Property AI" }
            p {
                "Use natural language to explore Zillow real estate data. "
                "You'll get a list of matching properties, each with a link to "
                "the listing, plus a generated summary of the result set."
            }

            h3 { "How to ask" }
            p { "Be specific. Useful details include:" }
            ul {
                li { strong { "Location" } " — city, state, ZIP or county" }
                li { strong { "Property type" } " — single family, lot, multi-family" }
                li { strong { "Status" } " — for sale or sold" }
                li { strong { "Price" } " — e.g. under/over $500,000" }
                li { strong { "Features" } " — bedrooms, bathrooms" }
            }

            h3 { "Example queries" }
            ul {
                li { em { "Show me homes with 4 bedrooms in Los Angeles." } }
                li { em { "What are the properties listed in Miami for $400,000?" } }
                li { em { "Find properties with 2 bathrooms in Chicago under $300,000." } }
            }

            p class="muted" {
                "This is a prototype over a static data set capped at 21 results "
                "per query; comparisons and investment analysis are out of scope. "
                "Images come from the listing API and may not exist for every "
                "property."
            }
        }
    }
}
