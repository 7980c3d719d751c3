use serde::{Deserialize, Serialize};

/// Form body for `/token` (OAuth2 password-flow field names).
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub disabled: bool,
}

impl From<crate::auth::store::StoredUser> for PublicUser {
    fn from(u: crate::auth::store::StoredUser) -> Self {
        Self {
            username: u.username,
            full_name: u.full_name,
            email: u.email,
            disabled: u.disabled,
        }
    }
}
