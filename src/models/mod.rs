//! Data models for database entities and API request/response types.

pub mod auth;
pub mod info;
pub mod purchase;
pub mod transaction;
pub mod user;
