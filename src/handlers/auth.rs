//! Authentication HTTP handler.
//!
//! - POST /api/auth - Log in as a username (creating it on first use) and get a token

use crate::{
    app::AppState,
    error::AppError,
    models::auth::{AuthRequest, AuthResponse},
    services::shop_service,
};
use axum::{Json, extract::State};

/// Authenticate and receive a bearer token.
///
/// The password is not verified. A username seen for the first time gets an
/// account with the starting balance.
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "anything" }
/// ```
///
/// # Response (200)
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
pub async fn authenticate(
    State(state): State<AppState>,
    Json(request): Json<AuthRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = shop_service::ensure_user(&state.pool, &request.username).await?;

    let token = state.tokens.issue(&user.username, Some(state.token_ttl))?;

    Ok(Json(AuthResponse { token }))
}
