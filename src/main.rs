#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]

use std::net::SocketAddr;

use anyhow::Result;
use axum::Extension;
use axum::Router;
use axum::middleware;
use axum::routing::get;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

use crate::storage::NoteStore;
use crate::utils::env_var;
use crate::utils::parse_address;

mod api;
mod graceful_shutdown;
mod notes;
mod request_logger;
mod root;
mod storage;
#[cfg(test)]
mod tests;
mod utils;

const DEFAULT_RUST_LOG: &str = "notes_api=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let app = setup_app()?;

    let address = setup_address()?;
    let listener = TcpListener::bind(address).await?;
    tracing::info!("Server running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown::handler())
        .await?;

    Ok(())
}

/// Create and setup the app with its seeded storage
///
/// # Errors
///
/// Will return `Err` if the seed notes can not be loaded
pub fn setup_app() -> Result<Router> {
    let store = storage::setup()?;

    Ok(create_router(store))
}

/// Create the router around the given storage
fn create_router(store: NoteStore) -> Router {
    Router::new()
        .route("/", get(root::greeting).fallback(root::unknown_endpoint))
        .nest("/api", api::router())
        .fallback(root::unknown_endpoint)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_logger::log_request))
                .layer(Extension(store)),
        )
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(
            env_var("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer())
        .init();
}

fn setup_address() -> Result<SocketAddr> {
    parse_address(env_var("ADDRESS"), env_var("PORT"))
}
