//! Coin transfer HTTP handler.
//!
//! - POST /api/sendcoin - Send coins to another user

use crate::{
    app::AppState,
    error::AppError,
    models::{
        transaction::{BalanceResponse, SendCoinRequest},
        user::CurrentUser,
    },
    services::shop_service,
};
use axum::{Extension, Json, extract::State};

/// Send coins to another user.
///
/// # Request Body
///
/// ```json
/// { "toUser": "bob", "amount": 200 }
/// ```
///
/// # Errors
///
/// - 400 `invalid_amount`: amount is zero or negative
/// - 404 `recipient_not_found`: no such user
/// - 400 `insufficient_funds`: balance too low
pub async fn send_coin(
    State(state): State<AppState>,
    Extension(CurrentUser(sender)): Extension<CurrentUser>,
    Json(request): Json<SendCoinRequest>,
) -> Result<Json<BalanceResponse>, AppError> {
    let balance =
        shop_service::transfer(&state.pool, &sender, &request.to_user, request.amount).await?;

    Ok(Json(BalanceResponse {
        message: "Coins sent successfully".to_string(),
        balance,
    }))
}
