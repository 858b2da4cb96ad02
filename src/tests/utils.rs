use crate::client::images::ImageClient;
use crate::client::inference::InferenceClient;
use crate::domain::document::ResultDocument;
use crate::router::AppContext;
use crate::session::store::SessionStore;
use astra::{Body, Request, Response};
use chrono::Utc;
use std::io::Read;

/// Context wired to an unreachable inference endpoint, so query submissions
/// exercise the transport-failure path without touching the network.
pub fn make_ctx() -> AppContext {
    AppContext {
        sessions: SessionStore::new(),
        inference: InferenceClient::new("http://127.0.0.1:1").unwrap(),
        images: ImageClient::new().unwrap(),
        cities: vec!["Austin, TX".to_string(), "Chicago, IL".to_string()],
    }
}

/// Context whose session already holds a fetched result set, plus the cookie
/// header value that addresses it.
pub fn seeded_ctx() -> (AppContext, String) {
    let ctx = make_ctx();
    let now = Utc::now();
    let token = ctx.sessions.create(now);

    ctx.sessions.with_session(&token, now, |session| {
        session.submit_query("homes in austin");
        session.record_success(
            vec![
                doc("300 King St", 300_000, "78701", "SINGLE_FAMILY"),
                doc("100 Lake Dr", 100_000, "60601", "CONDO"),
            ],
            "Two results.".to_string(),
        );
    });

    let cookie = format!("session={token}");
    (ctx, cookie)
}

pub fn doc(street: &str, price: i64, zipcode: &str, home_type: &str) -> ResultDocument {
    ResultDocument {
        street_address: street.to_string(),
        city: "Austin".to_string(),
        state: "TX".to_string(),
        zipcode: zipcode.to_string(),
        price,
        bedrooms: "3".to_string(),
        bathrooms: "2".to_string(),
        home_type: home_type.to_string(),
        image_url: None,
        listing_url: "#".to_string(),
    }
}

pub fn get(path: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(path: &str, body: &str, cookie: Option<&str>) -> Request {
    let mut builder = http::Request::builder()
        .method("POST")
        .uri(path)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}

pub fn body_bytes(mut resp: Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

/// The `session=...` pair from a Set-Cookie header, if the response set one.
pub fn session_cookie(resp: &Response) -> Option<String> {
    resp.headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.to_string())
}
