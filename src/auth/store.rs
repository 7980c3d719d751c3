use async_trait::async_trait;

use super::password::{hash_password, verify_password};
use crate::config::DemoUserConfig;

/// A stored credential record.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password_hash: String,
    pub disabled: bool,
}

/// Credential lookup behind the `/token` and `/users/me` endpoints. Kept as a
/// trait so the in-memory demo store can later be swapped for a DB-backed one
/// without touching the handlers.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_user(&self, username: &str) -> anyhow::Result<Option<StoredUser>>;
}

/// In-memory store seeded once at startup; read-only afterwards.
pub struct StaticUserStore {
    users: Vec<StoredUser>,
}

impl StaticUserStore {
    pub fn new(users: Vec<StoredUser>) -> Self {
        Self { users }
    }

    /// Build the single-user demo store from config, hashing the configured
    /// password at startup.
    pub fn seed(demo: &DemoUserConfig) -> anyhow::Result<Self> {
        let user = StoredUser {
            username: demo.username.clone(),
            full_name: demo.full_name.clone(),
            email: demo.email.clone(),
            password_hash: hash_password(&demo.password)?,
            disabled: false,
        };
        Ok(Self::new(vec![user]))
    }
}

#[async_trait]
impl CredentialStore for StaticUserStore {
    async fn find_user(&self, username: &str) -> anyhow::Result<Option<StoredUser>> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }
}

/// Check a username/password pair against the store. Returns the user only
/// when it exists and the password matches.
pub async fn authenticate_user(
    store: &dyn CredentialStore,
    username: &str,
    password: &str,
) -> anyhow::Result<Option<StoredUser>> {
    let Some(user) = store.find_user(username).await? else {
        return Ok(None);
    };
    if !verify_password(password, &user.password_hash)? {
        return Ok(None);
    }
    Ok(Some(user))
}
