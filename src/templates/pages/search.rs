// templates/pages/search.rs

use crate::session::state::{FetchStatus, QuerySession};
use crate::templates::components::{
    error_banner, filters_form, property_tile, summary_card, welcome_card,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct SearchVm {
    /// "City, State" options for the informational catalog dropdown.
    pub cities: Vec<String>,
    /// Snapshot of the caller's session at render time.
    pub session: QuerySession,
}

pub fn search_page(vm: &SearchVm) -> Markup {
    let session = &vm.session;
    let displayed = session.displayed();

    desktop_layout(
        "Property AI",
        html! {
            main class="container" {
                (query_form(&session.last_input, &vm.cities))

                @if let Some(message) = &session.error {
                    (error_banner(message))
                }

                @if session.results.is_empty() {
                    @if session.fetch_status == FetchStatus::Fetched {
                        p class="muted" { "No properties were returned for this query." }
                    }
                    (welcome_card())
                } @else {
                    (filters_form(&session.facets, &session.filters))
                    (summary_card(&session.summary))

                    section {
                        h2 { "Properties Available" }
                        @if displayed.is_empty() {
                            p { "No properties match the selected filters." }
                        } @else {
                            p { a href="/export" { "Download results (.xlsx)" } }
                            div class="tile-grid" {
                                @for document in &displayed {
                                    (property_tile(document))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn query_form(last_input: &str, cities: &[String]) -> Markup {
    html! {
        section class="card" {
            form action="/query" method="post" class="query-form" {
                label for="city-catalog" { "View available cities to query" }
                select id="city-catalog" name="city_catalog" {
                    @for option in cities {
                        option value=(option) { (option) }
                    }
                }
                input type="text" name="user_input" value=(last_input)
                    placeholder="Ask something about properties...";
                button type="submit" { "Search" }
            }
            @if !last_input.is_empty() {
                p class="muted" { "You asked: " (last_input) }
            }
        }
    }
}
