use crate::client::images::ImageClient;
use crate::client::inference::InferenceClient;
use crate::domain::filters::{FilterSelection, SortOrder, ZipcodeSelection};
use crate::errors::ServerError;
use crate::responses::{
    html_response, image_response, placeholder_response, redirect_response, ResultResp,
};
use crate::session::store::{SessionStore, SESSION_COOKIE};
use crate::spreadsheets::export_documents_xlsx;
use crate::templates::pages::{search_page, SearchVm};
use astra::{Request, Response};
use chrono::Utc;
use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use url::form_urlencoded;

/// Everything a request handler can reach. Built once at boot and shared by
/// the worker pool.
pub struct AppContext {
    pub sessions: SessionStore,
    pub inference: InferenceClient,
    pub images: ImageClient,
    /// "City, State" catalog options, loaded at startup.
    pub cities: Vec<String>,
}

pub fn handle(req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => get_search_page(req, ctx),
        ("POST", "/query") => post_query(req, ctx),
        ("POST", "/filters") => post_filters(req, ctx),
        ("GET", "/export") => get_export(req, ctx),
        ("GET", "/image") => get_image(req, ctx),
        _ => Err(ServerError::NotFound),
    }
}

fn get_search_page(req: Request, ctx: &AppContext) -> ResultResp {
    let (token, created) = ensure_session(&req, ctx);

    let snapshot = ctx
        .sessions
        .with_session(&token, Utc::now(), |session| session.clone())
        .ok_or(ServerError::InternalError)?;

    let vm = SearchVm {
        cities: ctx.cities.clone(),
        session: snapshot,
    };

    let resp = html_response(search_page(&vm))?;
    finish(resp, &token, created)
}

/// Query submission. The session decides whether this input starts a new
/// cycle; the inference call happens at most once per transition, never
/// during rendering.
fn post_query(req: Request, ctx: &AppContext) -> ResultResp {
    let (token, created) = ensure_session(&req, ctx);
    let form = parse_form_pairs(req)?;
    let input = form_value(&form, "user_input").unwrap_or_default();

    let needs_fetch = ctx
        .sessions
        .with_session(&token, Utc::now(), |session| {
            session.submit_query(&input);
            session.needs_fetch()
        })
        .ok_or(ServerError::InternalError)?;

    if needs_fetch {
        let outcome = ctx.inference.fetch(&input);
        ctx.sessions
            .with_session(&token, Utc::now(), |session| match outcome {
                Ok(result) => session.record_success(result.results, result.summary),
                Err(err) => {
                    err.log();
                    session.record_error(err.to_string());
                }
            })
            .ok_or(ServerError::InternalError)?;
    }

    let resp = redirect_response("/")?;
    finish(resp, &token, created)
}

/// Filter changes touch only the session's FilterSelection; results and
/// facets are left alone and no fetch happens.
fn post_filters(req: Request, ctx: &AppContext) -> ResultResp {
    let (token, created) = ensure_session(&req, ctx);
    let form = parse_form_pairs(req)?;

    ctx.sessions
        .with_session(&token, Utc::now(), |session| {
            session.filters = filters_from_form(&form, &session.filters);
        })
        .ok_or(ServerError::InternalError)?;

    let resp = redirect_response("/")?;
    finish(resp, &token, created)
}

fn get_export(req: Request, ctx: &AppContext) -> ResultResp {
    let (token, created) = ensure_session(&req, ctx);

    let documents = ctx
        .sessions
        .with_session(&token, Utc::now(), |session| session.displayed())
        .ok_or(ServerError::InternalError)?;

    let resp = export_documents_xlsx(&documents)?;
    finish(resp, &token, created)
}

/// Best-effort image proxy. A missing, unparseable, or failing upstream all
/// land on the placeholder; this route never errors.
fn get_image(req: Request, ctx: &AppContext) -> ResultResp {
    let params = parse_query(&req);

    let upstream = params.get("src").and_then(|raw| parse_image_url(raw));

    match upstream {
        Some(url) => match ctx.images.fetch(url.as_str()) {
            Some(image) => image_response(image),
            None => placeholder_response(),
        },
        None => placeholder_response(),
    }
}

fn parse_image_url(raw: &str) -> Option<url::Url> {
    let parsed = url::Url::parse(raw).ok()?;
    matches!(parsed.scheme(), "http" | "https").then_some(parsed)
}

/// Maps the posted filter form onto a FilterSelection. Unparseable numbers
/// keep the current value; checkbox groups that post nothing become empty
/// selections (which legitimately match no documents).
fn filters_from_form(form: &[(String, String)], current: &FilterSelection) -> FilterSelection {
    let mut price_range = current.price_range;
    for (key, value) in form {
        match key.as_str() {
            "price_min" => {
                if let Ok(n) = value.parse() {
                    price_range.0 = n;
                }
            }
            "price_max" => {
                if let Ok(n) = value.parse() {
                    price_range.1 = n;
                }
            }
            _ => {}
        }
    }

    let sort = match form_value(form, "sort").as_deref() {
        Some("desc") => SortOrder::Descending,
        Some("asc") => SortOrder::Ascending,
        _ => current.sort,
    };

    let zipcodes = if form.iter().any(|(key, _)| key == "select_all") {
        ZipcodeSelection::All
    } else {
        ZipcodeSelection::Explicit(collect_values(form, "zipcode"))
    };

    FilterSelection {
        price_range,
        zipcodes,
        home_types: collect_values(form, "hometype"),
        sort,
    }
}

// ---- session cookie plumbing ----

/// Returns a raw token that is guaranteed to resolve in the store, creating
/// a fresh session when the request carried no cookie or a dead one.
fn ensure_session(req: &Request, ctx: &AppContext) -> (String, bool) {
    let now = Utc::now();
    match cookie_token(req) {
        Some(token) if ctx.sessions.contains(&token, now) => (token, false),
        _ => (ctx.sessions.create(now), true),
    }
}

fn cookie_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;

    for pair in header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if let (Some(name), Some(value)) = (parts.next(), parts.next()) {
            if name == SESSION_COOKIE && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

fn finish(resp: Response, token: &str, created: bool) -> ResultResp {
    if created {
        with_session_cookie(resp, token)
    } else {
        Ok(resp)
    }
}

fn with_session_cookie(mut resp: Response, token: &str) -> ResultResp {
    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    let value = cookie.parse().map_err(|_| ServerError::InternalError)?;
    resp.headers_mut().insert("Set-Cookie", value);
    Ok(resp)
}

// ---- request parsing ----

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Urlencoded POST body as ordered pairs; checkbox groups repeat keys.
fn parse_form_pairs(req: Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut body = req.into_body();
    let mut buf = Vec::new();
    body.reader()
        .read_to_end(&mut buf)
        .map_err(|_| ServerError::BadRequest("unreadable request body".into()))?;

    Ok(form_urlencoded::parse(&buf).into_owned().collect())
}

fn form_value(form: &[(String, String)], key: &str) -> Option<String> {
    form.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

fn collect_values(form: &[(String, String)], key: &str) -> BTreeSet<String> {
    form.iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .collect()
}
