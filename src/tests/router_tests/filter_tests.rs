// src/tests/router_tests/filter_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, seeded_ctx};

#[test]
fn fetched_results_render_sorted_ascending_by_default() {
    let (ctx, cookie) = seeded_ctx();

    let body = body_string(handle(get("/", Some(&cookie)), &ctx).unwrap());

    assert!(body.contains("Properties Available"));
    assert!(body.contains("Apply Filters"));
    assert!(body.contains("Two results."));

    let cheap = body.find("Price: $100000").expect("cheap tile missing");
    let pricey = body.find("Price: $300000").expect("pricey tile missing");
    assert!(cheap < pricey, "default sort must be ascending");
}

#[test]
fn sort_descending_flips_the_rendered_order() {
    let (ctx, cookie) = seeded_ctx();

    let resp = handle(
        post_form(
            "/filters",
            "price_min=100000&price_max=300000&sort=desc&select_all=on\
             &hometype=SINGLE_FAMILY&hometype=CONDO",
            Some(&cookie),
        ),
        &ctx,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_string(handle(get("/", Some(&cookie)), &ctx).unwrap());
    let cheap = body.find("Price: $100000").unwrap();
    let pricey = body.find("Price: $300000").unwrap();
    assert!(pricey < cheap);
    // A filter change is not a fetch; no error banner, summary intact.
    assert!(!body.contains("Could not connect to the server"));
    assert!(body.contains("Two results."));
}

#[test]
fn explicit_zipcode_subset_narrows_the_list() {
    let (ctx, cookie) = seeded_ctx();

    handle(
        post_form(
            "/filters",
            "price_min=100000&price_max=300000&sort=asc&zipcode=78701\
             &hometype=SINGLE_FAMILY&hometype=CONDO",
            Some(&cookie),
        ),
        &ctx,
    )
    .unwrap();

    let body = body_string(handle(get("/", Some(&cookie)), &ctx).unwrap());
    assert!(body.contains("300 King St"));
    assert!(!body.contains("100 Lake Dr"));
}

#[test]
fn price_floor_excludes_cheaper_documents() {
    let (ctx, cookie) = seeded_ctx();

    handle(
        post_form(
            "/filters",
            "price_min=200000&price_max=300000&sort=asc&select_all=on\
             &hometype=SINGLE_FAMILY&hometype=CONDO",
            Some(&cookie),
        ),
        &ctx,
    )
    .unwrap();

    let body = body_string(handle(get("/", Some(&cookie)), &ctx).unwrap());
    assert!(body.contains("300 King St"));
    assert!(!body.contains("100 Lake Dr"));
}

#[test]
fn unchecking_every_home_type_matches_nothing() {
    let (ctx, cookie) = seeded_ctx();

    // No hometype fields at all: the selection becomes empty.
    handle(
        post_form(
            "/filters",
            "price_min=100000&price_max=300000&sort=asc&select_all=on",
            Some(&cookie),
        ),
        &ctx,
    )
    .unwrap();

    let body = body_string(handle(get("/", Some(&cookie)), &ctx).unwrap());
    assert!(body.contains("No properties match the selected filters."));
    assert!(!body.contains("300 King St"));
}

#[test]
fn select_all_keeps_every_zipcode_checked_in_the_form() {
    let (ctx, cookie) = seeded_ctx();

    let body = body_string(handle(get("/", Some(&cookie)), &ctx).unwrap());

    assert!(body.contains("Select All Zipcodes"));
    assert!(body.contains("78701"));
    assert!(body.contains("60601"));
}
