use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    decompression::RequestDecompressionLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

use crate::{route, state::ApiState, storage::Storage};

pub struct ServerConfig {
    socket_address: SocketAddr,
    auth_token: String,
}

impl ServerConfig {
    pub fn new(socket_address: SocketAddr, auth_token: String) -> Self {
        Self {
            socket_address,
            auth_token,
        }
    }
}

pub struct Server {
    config: ServerConfig,
    storage: Storage,
}

impl Server {
    /// The storage adapter is constructed by the caller and handed in; the
    /// server holds no other process-wide state.
    pub fn new(config: ServerConfig, storage: Storage) -> Self {
        Self { config, storage }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let ServerConfig {
            socket_address,
            auth_token,
        } = self.config;

        let state = ApiState::new(self.storage, auth_token);

        let app = router(state);

        tracing::info!(addr = %socket_address, "Starting server");

        let listener = TcpListener::bind(&socket_address)
            .await
            .context("Bind failed")?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server failed")?;

        Ok(())
    }
}

/// Assembles the full application router. Shared with the API tests, which
/// drive it directly.
pub(crate) fn router(state: ApiState) -> Router {
    route::books::app(state.clone())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
                )
                .layer(RequestDecompressionLayer::new())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");

        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;

        tracing::info!("SIGTERM received");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
