//! Authentication request/response types.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/auth`.
///
/// The password is accepted for compatibility with clients but never checked:
/// authenticating as a username logs in as that user, creating it on first use.
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// Response body for `POST /api/auth`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token for the `Authorization` header
    pub token: String,
}
