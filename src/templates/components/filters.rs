use crate::domain::facets::Facets;
use crate::domain::filters::{FilterSelection, SortOrder};
use maud::{html, Markup};

/// The filters form. Checkbox groups post repeated `hometype`/`zipcode`
/// fields; an unchecked group posts nothing, which the router reads as an
/// empty selection.
pub fn filters_form(facets: &Facets, filters: &FilterSelection) -> Markup {
    let (floor, ceiling) = facets.price_bounds;
    let (min, max) = filters.price_range;

    html! {
        section class="card" id="filters" {
            h3 { "Filters" }
            form action="/filters" method="post" class="filters-form" {
                div class="filter-group" {
                    label for="price_min" { "Price Range" }
                    input type="number" id="price_min" name="price_min"
                        value=(min) min=(floor) max=(ceiling) step="10000";
                    input type="number" id="price_max" name="price_max"
                        value=(max) min=(floor) max=(ceiling) step="10000";
                }

                div class="filter-group" {
                    span { "Sort by Price" }
                    label {
                        input type="radio" name="sort" value="asc"
                            checked[filters.sort == SortOrder::Ascending];
                        " Ascending"
                    }
                    label {
                        input type="radio" name="sort" value="desc"
                            checked[filters.sort == SortOrder::Descending];
                        " Descending"
                    }
                }

                div class="filter-group" {
                    span { "Home Types" }
                    @for home_type in &facets.home_types {
                        label {
                            input type="checkbox" name="hometype" value=(home_type)
                                checked[filters.home_types.contains(home_type)];
                            " " (home_type)
                        }
                    }
                }

                div class="filter-group" {
                    label {
                        input type="checkbox" name="select_all"
                            checked[filters.zipcodes.is_all()];
                        " Select All Zipcodes"
                    }
                    @for zipcode in &facets.zipcodes {
                        label {
                            input type="checkbox" name="zipcode" value=(zipcode)
                                checked[filters.zipcodes.allows(zipcode)];
                            " " (zipcode)
                        }
                    }
                }

                button type="submit" { "Apply Filters" }
            }
        }
    }
}
