//! Merch purchase HTTP handler.

use crate::{
    app::AppState,
    error::AppError,
    models::{transaction::BalanceResponse, user::CurrentUser},
    services::shop_service,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};

/// Buy one catalog item.
///
/// # Endpoint
///
/// `GET /api/buy/{item}`
///
/// # Errors
///
/// - 404 `item_not_found`: item not in catalog
/// - 400 `insufficient_funds`: balance below the item price
pub async fn buy_item(
    State(state): State<AppState>,
    Extension(CurrentUser(buyer)): Extension<CurrentUser>,
    Path(item): Path<String>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance = shop_service::purchase(&state.pool, &buyer, &item).await?;

    Ok(Json(BalanceResponse {
        message: format!("Purchased '{item}' successfully"),
        balance,
    }))
}
