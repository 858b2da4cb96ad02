// src/tests/router_tests/search_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, make_ctx, post_form, session_cookie};

#[test]
fn home_page_sets_a_cookie_and_shows_the_welcome_card() {
    let ctx = make_ctx();

    let resp = handle(get("/", None), &ctx).unwrap();

    assert_eq!(resp.status(), 200);
    let cookie = session_cookie(&resp).expect("first visit must set a session cookie");
    assert!(cookie.starts_with("session="));

    let body = body_string(resp);
    assert!(body.contains("Property AI"));
    assert!(body.contains("Welcome to Property AI"));
    assert!(body.contains("Ask something about properties"));
    // The catalog dropdown renders the configured cities.
    assert!(body.contains("Austin, TX"));
}

#[test]
fn returning_with_the_cookie_reuses_the_session() {
    let ctx = make_ctx();

    let first = handle(get("/", None), &ctx).unwrap();
    let cookie = session_cookie(&first).unwrap();

    // A second visit with the cookie must not mint a new session.
    let second = handle(get("/", Some(&cookie)), &ctx).unwrap();
    assert_eq!(session_cookie(&second), None);
}

#[test]
fn failed_query_shows_the_transport_banner_and_keeps_results_empty() {
    let ctx = make_ctx();

    let first = handle(get("/", None), &ctx).unwrap();
    let cookie = session_cookie(&first).unwrap();

    // The inference endpoint is unreachable, so this records a transport error.
    let resp = handle(
        post_form("/query", "user_input=find+homes", Some(&cookie)),
        &ctx,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_string(handle(get("/", Some(&cookie)), &ctx).unwrap());
    assert!(body.contains("Could not connect to the server"));
    assert!(body.contains("You asked: find homes"));
    // No results: the welcome card is still there and no filters render.
    assert!(body.contains("Welcome to Property AI"));
    assert!(!body.contains("Apply Filters"));
}

#[test]
fn resubmitting_the_same_query_is_a_noop() {
    let ctx = make_ctx();

    let first = handle(get("/", None), &ctx).unwrap();
    let cookie = session_cookie(&first).unwrap();

    handle(
        post_form("/query", "user_input=find+homes", Some(&cookie)),
        &ctx,
    )
    .unwrap();
    let before = body_string(handle(get("/", Some(&cookie)), &ctx).unwrap());

    // Same input again: dedup means no second fetch and identical state.
    handle(
        post_form("/query", "user_input=find+homes", Some(&cookie)),
        &ctx,
    )
    .unwrap();
    let after = body_string(handle(get("/", Some(&cookie)), &ctx).unwrap());

    assert_eq!(before, after);
}

#[test]
fn empty_query_submission_changes_nothing() {
    let ctx = make_ctx();

    let first = handle(get("/", None), &ctx).unwrap();
    let cookie = session_cookie(&first).unwrap();

    handle(post_form("/query", "user_input=", Some(&cookie)), &ctx).unwrap();

    let body = body_string(handle(get("/", Some(&cookie)), &ctx).unwrap());
    assert!(!body.contains("You asked:"));
    assert!(!body.contains("Could not connect to the server"));
}

#[test]
fn unknown_routes_return_not_found() {
    let ctx = make_ctx();

    assert!(matches!(
        handle(get("/nope", None), &ctx),
        Err(ServerError::NotFound)
    ));
}
