//! Profile HTTP handler.

use crate::{
    app::AppState,
    error::AppError,
    models::{info::InfoResponse, user::CurrentUser},
    services::shop_service,
};
use axum::{Extension, Json, extract::State};

/// Balance, inventory and coin history of the caller.
///
/// # Endpoint
///
/// `GET /api/info`
///
/// # Response (200)
///
/// ```json
/// {
///   "coins": 920,
///   "inventory": [{ "type": "t-shirt", "quantity": 1 }],
///   "coinHistory": { "received": [], "sent": [] }
/// }
/// ```
pub async fn get_info(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<InfoResponse>, AppError> {
    let profile = shop_service::get_profile(&state.pool, &user).await?;

    Ok(Json(profile))
}
