// src/client/images.rs

use crate::client::fetch_error::FetchError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

const IMAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Bytes and content type of a successfully proxied listing image.
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Best-effort fetcher for listing images. Every failure is absorbed here:
/// callers get `None`, log output records why, and the page renders a
/// placeholder instead. An image can never fail a request.
pub struct ImageClient {
    client: Client,
}

impl ImageClient {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(IMAGE_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn fetch(&self, url: &str) -> Option<FetchedImage> {
        let resp = match self.client.get(url).send() {
            Ok(resp) => resp,
            Err(e) => {
                eprintln!("⚠️ Image fetch failed for {url}: {e}");
                return None;
            }
        };

        if !resp.status().is_success() {
            eprintln!("⚠️ Image fetch for {url} returned HTTP {}", resp.status());
            return None;
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !is_image(&content_type) {
            eprintln!("⚠️ Image fetch for {url} returned non-image content type {content_type:?}");
            return None;
        }

        match resp.bytes() {
            Ok(bytes) => Some(FetchedImage {
                bytes: bytes.to_vec(),
                content_type,
            }),
            Err(e) => {
                eprintln!("⚠️ Image body read failed for {url}: {e}");
                None
            }
        }
    }
}

fn is_image(content_type: &str) -> bool {
    content_type
        .parse::<mime::Mime>()
        .map(|m| m.type_() == mime::IMAGE)
        .unwrap_or(false)
}
