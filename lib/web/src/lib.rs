use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::str::FromStr;

mod config;
mod error;
mod negotiation;
mod resource;

pub use config::ServerConfig;
pub use error::ServerError;

use crate::resource::{handle_cluster_get, handle_resource_get};
use quadview_client::SparqlClient;
use quadview_view::ViewConfig;

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from_str(&config.bind)?;

    let app_state = AppState {
        client: SparqlClient::new(config.client),
        view: config.view,
    };

    let app = Router::new()
        .route("/cluster/{*path}", get(handle_cluster_get))
        .route("/{*path}", get(handle_resource_get))
        .with_state(app_state);

    let app = if config.cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    Ok(axum::serve(listener, app).await?)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) client: SparqlClient,
    pub(crate) view: ViewConfig,
}
