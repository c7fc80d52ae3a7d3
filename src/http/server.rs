//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the employee routes
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Serve on a listener until the shutdown signal fires

use std::time::Duration;

use axum::http::StatusCode;
use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::FacadeConfig;
use crate::employee::EmployeeCore;
use crate::error::FacadeResult;
use crate::http::handlers;
use crate::http::middleware::metrics::track_metrics;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::observability::tracing::request_span;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub core: EmployeeCore,
}

/// HTTP server for the employee facade.
pub struct HttpServer {
    router: Router,
    config: FacadeConfig,
}

impl HttpServer {
    /// Create a server around an already constructed core.
    pub fn new(config: FacadeConfig, core: EmployeeCore) -> Self {
        let state = AppState { core };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Create a server, building the upstream client from configuration.
    pub fn from_config(config: FacadeConfig) -> FacadeResult<Self> {
        let upstream = UpstreamClient::from_config(&config.api, &config.timeouts)?;
        Ok(Self::new(config, EmployeeCore::new(upstream)))
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &FacadeConfig, state: AppState) -> Router {
        Router::new()
            .route(
                "/employee",
                get(handlers::get_all_employees).post(handlers::create_employee),
            )
            .route(
                "/employee/search/{search}",
                get(handlers::get_employees_by_name_search),
            )
            .route("/employee/highestSalary", get(handlers::get_highest_salary))
            .route(
                "/employee/topTenHighestEarningEmployeeNames",
                get(handlers::get_top_ten_highest_earning_names),
            )
            .route(
                "/employee/{id}",
                get(handlers::get_employee_by_id).delete(handlers::delete_employee_by_id),
            )
            .route("/health", get(handlers::get_status))
            .route_layer(middleware::from_fn(track_metrics))
            .with_state(state)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::BAD_GATEWAY,
                Duration::from_secs(config.timeouts.request_secs),
            ))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(set_request_id_layer())
    }

    /// The fully layered router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires. In-flight requests are drained before returning.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.api.base.uri,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }
}
