//! Merch shop service.
//!
//! Users authenticate with a username, receive 1000 coins on first login, send
//! coins to each other and spend them on a fixed merch catalog. Balances live in
//! PostgreSQL and every balance change is a single database transaction.

pub mod app;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
