//! Application state and HTTP router.
//!
//! # Endpoints
//!
//! - `POST /api/auth` - Get a token (public)
//! - `POST /api/sendcoin` - Send coins (auth)
//! - `GET /api/buy/{item}` - Buy merch (auth)
//! - `GET /api/info` - Balance, inventory, history (auth)
//! - `GET /health` - Service health (public)

use crate::{db::DbPool, handlers, middleware, services::token_service::TokenService};
use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use chrono::Duration;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
///
/// Holds no ledger data: the database is the only source of truth.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,

    pub tokens: TokenService,

    /// Lifetime of tokens issued by `/api/auth`
    pub token_ttl: Duration,
}

impl AppState {
    pub fn new(pool: DbPool, secret: &str, token_ttl_minutes: i64) -> Self {
        Self {
            pool,
            tokens: TokenService::new(secret),
            token_ttl: Duration::minutes(token_ttl_minutes),
        }
    }
}

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let authenticated_routes = Router::new()
        .route("/api/sendcoin", post(handlers::coins::send_coin))
        .route("/api/sendCoin", post(handlers::coins::send_coin))
        .route("/api/buy/{item}", get(handlers::merch::buy_item))
        .route("/api/info", get(handlers::info::get_info))
        // Apply authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/auth", post(handlers::auth::authenticate))
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
