// src/tests/router_tests/image_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, make_ctx};

fn assert_placeholder(resp: astra::Response) {
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "image/svg+xml");
    assert!(body_string(resp).contains("Image not available"));
}

#[test]
fn missing_src_serves_the_placeholder() {
    let ctx = make_ctx();

    assert_placeholder(handle(get("/image", None), &ctx).unwrap());
}

#[test]
fn non_http_src_serves_the_placeholder() {
    let ctx = make_ctx();

    assert_placeholder(handle(get("/image?src=ftp%3A%2F%2Fhost%2Fpic.jpg", None), &ctx).unwrap());
    assert_placeholder(handle(get("/image?src=not-a-url", None), &ctx).unwrap());
}

#[test]
fn unreachable_upstream_serves_the_placeholder() {
    let ctx = make_ctx();

    // Valid http URL, but nothing listens there; the failure is absorbed.
    let resp = handle(
        get("/image?src=http%3A%2F%2F127.0.0.1%3A1%2Fpic.jpg", None),
        &ctx,
    )
    .unwrap();
    assert_placeholder(resp);
}
