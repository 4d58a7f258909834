//! HTTP server setup and the relay handler.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all relay handler
//! - Wire up middleware (timeout, request ID, tracing, origin header)
//! - Serve with graceful shutdown
//! - Map inbound requests through the relay contract

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request},
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RelayConfig;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::http::response;
use crate::relay::params::EmoteParams;
use crate::relay::url::forwarding_url;
use crate::upstream::UpstreamClient;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<UpstreamClient>,
}

/// HTTP server hosting the relay.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let upstream = Arc::new(UpstreamClient::new(&config.upstream)?);
        let state = AppState { upstream };
        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The origin header layer is outermost so every response carries it,
    /// whichever layer produced the response.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(relay_handler))
            .route("/", any(relay_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(response::allow_origin_layer())
                    .layer(set_request_id_layer())
                    .layer(propagate_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server until Ctrl+C or the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Relay handler. Implements the whole inbound contract: preflight,
/// method gate, parameter validation, forwarding, and outcome mapping.
/// Every branch returns a response.
async fn relay_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id(request.headers()).to_string();
    let method = request.method().clone();

    if method == Method::OPTIONS {
        return response::preflight();
    }

    if method != Method::GET {
        tracing::debug!(
            request_id = %request_id,
            method = %method,
            "Method rejected"
        );
        return response::method_not_allowed();
    }

    let query = request.uri().query().unwrap_or("");
    let params = match EmoteParams::from_query(query) {
        Ok(params) => params,
        Err(_) => {
            tracing::warn!(request_id = %request_id, "Missing required parameters");
            return response::missing_params();
        }
    };

    let target = forwarding_url(&params);
    tracing::debug!(
        request_id = %request_id,
        server = %params.server,
        emote_id = %params.emote_id,
        "Relaying emote request"
    );

    match state.upstream.relay(&target).await {
        Ok(reply) => {
            tracing::debug!(
                request_id = %request_id,
                upstream_status = reply.status,
                "Upstream call completed"
            );
            response::relayed(reply)
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                error = %e,
                "Upstream call failed"
            );
            response::relay_failed(e)
        }
    }
}

/// Resolve when Ctrl+C arrives or the shutdown coordinator fires.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if result.is_ok() {
                tracing::info!("Shutdown signal received");
            }
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown triggered");
        }
    }
}
