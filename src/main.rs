use crate::client::images::ImageClient;
use crate::client::inference::InferenceClient;
use crate::router::{handle, AppContext};
use crate::session::store::SessionStore;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod client;
mod domain;
mod errors;
mod geos;
mod responses;
mod router;
mod session;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

const CITY_CATALOG_PATH: &str = "availableCities.json";

fn main() {
    // 1️⃣ Load the static city/state catalog
    let cities = match geos::load_city_catalog(CITY_CATALOG_PATH) {
        Ok(cities) => cities,
        Err(e) => {
            eprintln!("❌ City catalog load failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the outbound clients
    let inference = match InferenceClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Inference client init failed: {e}");
            std::process::exit(1);
        }
    };
    let images = match ImageClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Image client init failed: {e}");
            std::process::exit(1);
        }
    };

    let ctx = Arc::new(AppContext {
        sessions: SessionStore::new(),
        inference,
        images,
        cities,
    });

    // 3️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
