//! Profile (`GET /api/info`) response types.

use serde::{Deserialize, Serialize};

/// Full profile of the authenticated user.
///
/// # JSON Example
///
/// ```json
/// {
///   "coins": 870,
///   "inventory": [{ "type": "cup", "quantity": 2 }],
///   "coinHistory": {
///     "received": [{ "fromUser": "bob", "amount": 100 }],
///     "sent": [{ "toUser": "carol", "amount": 190 }]
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct InfoResponse {
    pub coins: i64,

    pub inventory: Vec<InventoryItem>,

    #[serde(rename = "coinHistory")]
    pub coin_history: CoinHistory,
}

/// Number of times one catalog item was bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryItem {
    #[serde(rename = "type")]
    pub item_type: String,

    pub quantity: i64,
}

/// Transfers the user took part in, oldest first.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CoinHistory {
    pub received: Vec<ReceivedCoins>,

    pub sent: Vec<SentCoins>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReceivedCoins {
    #[serde(rename = "fromUser")]
    pub from_user: String,

    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SentCoins {
    #[serde(rename = "toUser")]
    pub to_user: String,

    pub amount: i64,
}
