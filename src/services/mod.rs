//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle database transactions, validation, and token handling.

pub mod shop_service;
pub mod token_service;
