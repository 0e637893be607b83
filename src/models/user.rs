//! User data model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Coins every new user starts with.
pub const STARTING_BALANCE: i64 = 1000;

/// Represents a user record from the database.
///
/// # Database Table
///
/// Maps to the `users` table. Each user:
/// - Is identified by a unique, immutable `username`
/// - Holds a non-negative `coin_balance` (enforced by a CHECK constraint)
///
/// Users are created on first authentication and never deleted.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct User {
    /// Surrogate key
    pub id: i64,

    pub username: String,

    /// Current balance in coins
    ///
    /// Only the shop service mutates it, and only inside a database transaction.
    pub coin_balance: i64,

    pub created_at: DateTime<Utc>,
}

/// Identity of the caller, injected into request extensions by the auth middleware.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);
