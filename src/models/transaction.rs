//! Coin transfer models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed coin transfer, as stored in the `transactions` table.
///
/// Rows are append-only. `sender_id` may equal `receiver_id` when a user
/// sends coins to themselves.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CoinTransaction {
    pub id: i64,

    pub sender_id: i64,

    pub receiver_id: i64,

    /// Always positive (CHECK constraint)
    pub amount: i64,

    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/sendcoin`.
///
/// # JSON Example
///
/// ```json
/// {
///   "toUser": "bob",
///   "amount": 200
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SendCoinRequest {
    #[serde(rename = "toUser")]
    pub to_user: String,

    pub amount: i64,
}

/// Response for balance-changing operations (send coins, buy item).
///
/// ```json
/// {
///   "message": "Coins sent successfully",
///   "balance": 800
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub message: String,

    /// Caller's balance after the operation committed
    pub balance: i64,
}
