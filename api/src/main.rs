//! Receivables API Server
//!
//! A small business backend managing assignors (payees) and the payables
//! owed to them. Uses hexagonal (ports & adapters) architecture for clean
//! separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{PostgresAssignorRepository, PostgresPayableRepository, PostgresUserRepository};
use app::{AccountService, AssignorService, PayableService};
use auth::JwtKeys;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assignor_service: Arc<AssignorService<PostgresAssignorRepository>>,
    pub payable_service:
        Arc<PayableService<PostgresPayableRepository, PostgresAssignorRepository>>,
    pub account_service: Arc<AccountService<PostgresUserRepository>>,
    pub jwt: JwtKeys,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,receivables_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Receivables API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let assignor_repo = Arc::new(PostgresAssignorRepository::new(db.clone()));
    let payable_repo = Arc::new(PostgresPayableRepository::new(db.clone()));
    let user_repo = Arc::new(PostgresUserRepository::new(db.clone()));

    // Create application services
    let assignor_service = Arc::new(AssignorService::new(assignor_repo.clone()));
    let payable_service = Arc::new(PayableService::new(
        payable_repo.clone(),
        assignor_repo.clone(),
    ));
    let account_service = Arc::new(AccountService::new(user_repo.clone()));

    let jwt = JwtKeys::new(&config.jwt_secret, config.jwt_expiration_secs);

    // Create app state
    let state = AppState {
        assignor_service,
        payable_service,
        account_service,
        jwt,
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    // (SmartIpKeyExtractor requires X-Forwarded-For headers from reverse proxy)
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Rate-limited routes (registration, authentication)
    let rate_limited_routes = Router::new()
        .route("/integrations/user", post(handlers::register))
        .route("/integrations/auth", post(handlers::authenticate))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        // Combined create flow (public, unauthenticated)
        .route(
            "/integrations/payable",
            post(handlers::receive_payable_and_assignor),
        )
        // Merge rate-limited routes
        .merge(rate_limited_routes)
        // Protected routes
        .nest(
            "/",
            Router::new()
                .route(
                    "/integrations/assignor/:id",
                    get(handlers::get_assignor)
                        .put(handlers::edit_assignor)
                        .delete(handlers::delete_assignor),
                )
                .route(
                    "/integrations/payable/:id",
                    get(handlers::get_payable)
                        .put(handlers::edit_payable)
                        .delete(handlers::delete_payable),
                )
                .route(
                    "/integrations/payable/:id/assignor",
                    get(handlers::get_payable_with_assignor),
                )
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth::auth_middleware,
                )),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
