//! Shop service - Core business logic for the coin ledger.
//!
//! This service handles:
//! - Find-or-create provisioning of users on authentication
//! - Coin transfers between users
//! - Merch purchases against the static catalog
//! - Profile queries (balance, inventory, transfer history)
//!
//! # Atomicity Guarantees
//!
//! Every mutating operation runs inside one PostgreSQL transaction. Affected user
//! rows are locked with `FOR UPDATE` before the balance check, so concurrent
//! operations on the same user are serialized and can never both spend the same
//! coins. All validation happens before the first write; any error rolls the
//! transaction back.

use crate::{
    catalog,
    db::DbPool,
    error::AppError,
    models::{
        info::{CoinHistory, InfoResponse, InventoryItem, ReceivedCoins, SentCoins},
        purchase::Purchase,
        transaction::CoinTransaction,
        user::{STARTING_BALANCE, User},
    },
};

/// Find a user by username, creating it with the starting balance if absent.
///
/// Safe under concurrent first logins: the insert is a no-op when another request
/// already created the row, and an existing balance is never reset.
pub async fn ensure_user(pool: &DbPool, username: &str) -> Result<User, AppError> {
    let mut tx = pool.begin().await?;

    let inserted = sqlx::query(
        r#"
        INSERT INTO users (username, coin_balance)
        VALUES ($1, $2)
        ON CONFLICT (username) DO NOTHING
        "#,
    )
    .bind(username)
    .bind(STARTING_BALANCE)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, coin_balance, created_at FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    if inserted > 0 {
        tracing::info!(user_id = user.id, username, "created user");
    }

    Ok(user)
}

/// Look up a user by username.
pub async fn find_user_by_username(
    pool: &DbPool,
    username: &str,
) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, coin_balance, created_at FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Look up a user by id.
pub async fn find_user_by_id(pool: &DbPool, user_id: i64) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, coin_balance, created_at FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Move `amount` coins from `sender` to the user named `receiver_username`.
///
/// # Process
///
/// 1. Validate amount
/// 2. Start database transaction
/// 3. Resolve recipient
/// 4. Lock both user rows (ascending id) and check the sender's balance
/// 5. Debit, credit and record the transfer
/// 6. Commit (or rollback on error)
///
/// Sending to oneself is allowed: the balance is unchanged and a
/// self-referencing transfer row is recorded.
///
/// # Returns
///
/// The sender's balance after the transfer
///
/// # Errors
///
/// - `InvalidAmount`: amount is zero or negative
/// - `RecipientNotFound`: no user with that username
/// - `InsufficientFunds`: sender's balance is below `amount`
/// - `Unauthenticated`: the sender row no longer exists
/// - `Database`: database error occurred
pub async fn transfer(
    pool: &DbPool,
    sender: &User,
    receiver_username: &str,
    amount: i64,
) -> Result<i64, AppError> {
    if amount <= 0 {
        return Err(AppError::InvalidAmount);
    }

    let mut tx = pool.begin().await?;

    let receiver = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE username = $1")
        .bind(receiver_username)
        .fetch_optional(&mut *tx)
        .await?;

    let Some(receiver_id) = receiver else {
        tx.rollback().await?;
        return Err(AppError::RecipientNotFound);
    };

    // Lock in a fixed order so two opposite transfers cannot deadlock
    let locked: Vec<(i64, i64)> = sqlx::query_as(
        "SELECT id, coin_balance FROM users WHERE id = ANY($1) ORDER BY id FOR UPDATE",
    )
    .bind(vec![sender.id, receiver_id])
    .fetch_all(&mut *tx)
    .await?;

    let Some(&(_, sender_balance)) = locked.iter().find(|(id, _)| *id == sender.id) else {
        tx.rollback().await?;
        return Err(AppError::Unauthenticated);
    };

    if sender_balance < amount {
        tx.rollback().await?;
        return Err(AppError::InsufficientFunds);
    }

    let new_balance: i64 = sqlx::query_scalar(
        "UPDATE users SET coin_balance = coin_balance - $1 WHERE id = $2 RETURNING coin_balance",
    )
    .bind(amount)
    .bind(sender.id)
    .fetch_one(&mut *tx)
    .await?;

    let receiver_balance: i64 = sqlx::query_scalar(
        "UPDATE users SET coin_balance = coin_balance + $1 WHERE id = $2 RETURNING coin_balance",
    )
    .bind(amount)
    .bind(receiver_id)
    .fetch_one(&mut *tx)
    .await?;

    let record = sqlx::query_as::<_, CoinTransaction>(
        r#"
        INSERT INTO transactions (sender_id, receiver_id, amount)
        VALUES ($1, $2, $3)
        RETURNING id, sender_id, receiver_id, amount, created_at
        "#,
    )
    .bind(sender.id)
    .bind(receiver_id)
    .bind(amount)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(
        transaction_id = record.id,
        sender_id = record.sender_id,
        receiver_id = record.receiver_id,
        amount = record.amount,
        "transferred coins"
    );

    // Self-transfer: both updates hit the same row, the last one is authoritative
    if receiver_id == sender.id {
        return Ok(receiver_balance);
    }

    Ok(new_balance)
}

/// Buy one unit of `item_name` from the catalog for `buyer`.
///
/// # Returns
///
/// The buyer's balance after the purchase
///
/// # Errors
///
/// - `ItemNotFound`: item is not in the catalog
/// - `InsufficientFunds`: balance is below the item price
/// - `Unauthenticated`: the buyer row no longer exists
/// - `Database`: database error occurred
pub async fn purchase(pool: &DbPool, buyer: &User, item_name: &str) -> Result<i64, AppError> {
    let price = catalog::price_of(item_name).ok_or(AppError::ItemNotFound)?;

    let mut tx = pool.begin().await?;

    let locked = sqlx::query_scalar::<_, i64>(
        "SELECT coin_balance FROM users WHERE id = $1 FOR UPDATE",
    )
    .bind(buyer.id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(balance) = locked else {
        tx.rollback().await?;
        return Err(AppError::Unauthenticated);
    };

    if balance < price {
        tx.rollback().await?;
        return Err(AppError::InsufficientFunds);
    }

    let new_balance: i64 = sqlx::query_scalar(
        "UPDATE users SET coin_balance = coin_balance - $1 WHERE id = $2 RETURNING coin_balance",
    )
    .bind(price)
    .bind(buyer.id)
    .fetch_one(&mut *tx)
    .await?;

    let record = sqlx::query_as::<_, Purchase>(
        r#"
        INSERT INTO purchases (user_id, merch_name, price)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, merch_name, price, created_at
        "#,
    )
    .bind(buyer.id)
    .bind(item_name)
    .bind(price)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(
        purchase_id = record.id,
        user_id = record.user_id,
        item = %record.merch_name,
        price = record.price,
        "purchased item"
    );

    Ok(new_balance)
}

/// Balance, inventory and transfer history of `user`.
///
/// All reads come from one `REPEATABLE READ` snapshot, so a transfer or purchase
/// committing concurrently is either fully visible or not at all. History is
/// ordered oldest first; inventory by item name.
pub async fn get_profile(pool: &DbPool, user: &User) -> Result<InfoResponse, AppError> {
    let mut tx = pool.begin().await?;

    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;

    let coins: i64 = sqlx::query_scalar("SELECT coin_balance FROM users WHERE id = $1")
        .bind(user.id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AppError::Unauthenticated)?;

    let inventory = sqlx::query_as::<_, InventoryItem>(
        r#"
        SELECT merch_name AS item_type, COUNT(*) AS quantity
        FROM purchases
        WHERE user_id = $1
        GROUP BY merch_name
        ORDER BY merch_name
        "#,
    )
    .bind(user.id)
    .fetch_all(&mut *tx)
    .await?;

    let received = sqlx::query_as::<_, ReceivedCoins>(
        r#"
        SELECT u.username AS from_user, t.amount
        FROM transactions t
        JOIN users u ON u.id = t.sender_id
        WHERE t.receiver_id = $1
        ORDER BY t.created_at, t.id
        "#,
    )
    .bind(user.id)
    .fetch_all(&mut *tx)
    .await?;

    let sent = sqlx::query_as::<_, SentCoins>(
        r#"
        SELECT u.username AS to_user, t.amount
        FROM transactions t
        JOIN users u ON u.id = t.receiver_id
        WHERE t.sender_id = $1
        ORDER BY t.created_at, t.id
        "#,
    )
    .bind(user.id)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(InfoResponse {
        coins,
        inventory,
        coin_history: CoinHistory { received, sent },
    })
}
