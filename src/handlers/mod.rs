//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Calls into the shop or token service
//! 3. Returns HTTP response (JSON, status code)

/// Authentication (token issue) endpoint
pub mod auth;
/// Coin transfer endpoint
pub mod coins;
/// Health check endpoint
pub mod health;
/// Profile endpoint
pub mod info;
/// Merch purchase endpoint
pub mod merch;
