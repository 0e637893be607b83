//! Merch purchase model.

use chrono::{DateTime, Utc};

/// A completed purchase, as stored in the `purchases` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Purchase {
    pub id: i64,

    pub user_id: i64,

    /// Catalog item name
    pub merch_name: String,

    /// Catalog price at the moment of purchase
    pub price: i64,

    pub created_at: DateTime<Utc>,
}
