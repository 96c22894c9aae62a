//! Session store - the single-writer holder of the current user.
//!
//! At most one User is authenticated per process, mirroring the
//! one-browser-tab model. All mutation funnels through the four named
//! operations; each one persists the outcome synchronously before it
//! resolves, so the persisted record never lags the in-memory state.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::data;
use crate::error::{AppError, Result};
use crate::models::user::DEFAULT_AVATAR;
use crate::models::{User, UserRole};
use crate::services::simulate;
use crate::util::ids;

pub struct SessionStore {
    current: Mutex<Option<User>>,
    store_path: PathBuf,
    latency: Duration,
}

impl SessionStore {
    /// Open the store, synchronously restoring the persisted session record
    /// if one exists. This read is the only "loading" window the app has.
    pub fn open(store_path: impl Into<PathBuf>, latency: Duration) -> Self {
        let store_path = store_path.into();
        let current = match fs::read_to_string(&store_path) {
            Ok(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    info!("restored session for @{}", user.username);
                    Some(user)
                }
                Err(err) => {
                    warn!("discarding unreadable session record: {}", err);
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            current: Mutex::new(current),
            store_path,
            latency,
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.lock().clone()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.lock().as_ref().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    /// Mock login: match a user by email, case-insensitively, in the fixed
    /// user set. The password is accepted but never checked against any
    /// credential - a surfaced limitation of the simulated backend.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User> {
        simulate::latency(self.latency).await;

        let found = data::MOCK_USERS
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned();

        let Some(user) = found else {
            info!("login rejected for {}: no matching account", email);
            return Err(AppError::InvalidCredentials);
        };

        self.set_current(user)
    }

    /// Wallet login: associate an address string with a User. A known
    /// address resolves to its existing account; an unknown one synthesizes
    /// a fresh account on the spot. Only an empty address is rejected.
    pub async fn login_with_wallet(&self, address: &str) -> Result<User> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AppError::MissingWalletAddress);
        }

        simulate::latency(self.latency).await;

        let user = data::MOCK_USERS
            .iter()
            .find(|u| u.wallet_address.as_deref() == Some(address))
            .cloned()
            .unwrap_or_else(|| synthesize_wallet_user(address));

        self.set_current(user)
    }

    /// Mock registration: reject email or username collisions against the
    /// fixed user set, otherwise mint a new account with zeroed stats.
    pub async fn register(&self, email: &str, _password: &str, username: &str) -> Result<User> {
        simulate::latency(self.latency).await;

        if data::MOCK_USERS
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(email))
        {
            return Err(AppError::EmailAlreadyExists);
        }
        if data::MOCK_USERS
            .iter()
            .any(|u| u.username.eq_ignore_ascii_case(username))
        {
            return Err(AppError::UsernameAlreadyExists);
        }

        let user = User {
            id: ids::next_id("user"),
            username: username.to_string(),
            email: email.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            role: UserRole::User,
            verified: false,
            followers: 0,
            following: 0,
            total_earned: 0.0,
            wallet_balance: 0.0,
            wallet_address: None,
            created_at: Utc::now(),
            bio: None,
        };

        self.set_current(user)
    }

    /// Clear the current user and remove the persisted record.
    pub fn logout(&self) {
        let previous = self.lock().take();
        if let Some(user) = previous {
            info!("session ended for @{}", user.username);
        }
        if let Err(err) = fs::remove_file(&self.store_path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("failed to remove persisted session record: {}", err);
            }
        }
    }

    fn set_current(&self, user: User) -> Result<User> {
        self.persist(&user)?;
        *self.lock() = Some(user.clone());
        info!("session started for @{} ({})", user.username, user.role.as_str());
        Ok(user)
    }

    fn persist(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::SessionStore(format!("create {}: {}", parent.display(), e)))?;
        }
        let raw = serde_json::to_string_pretty(user)
            .map_err(|e| AppError::SessionStore(format!("encode session record: {}", e)))?;
        fs::write(&self.store_path, raw)
            .map_err(|e| AppError::SessionStore(format!("write {}: {}", self.store_path.display(), e)))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<User>> {
        self.current.lock().expect("session mutex poisoned")
    }
}

fn synthesize_wallet_user(address: &str) -> User {
    // Username derived from the tail of the address, the way wallet UIs
    // abbreviate accounts.
    let suffix: String = address
        .chars()
        .rev()
        .take(6)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    User {
        id: ids::next_id("wallet"),
        username: format!("user_{}", suffix),
        email: String::new(),
        avatar: DEFAULT_AVATAR.to_string(),
        role: UserRole::User,
        verified: false,
        followers: 0,
        following: 0,
        total_earned: 0.0,
        wallet_balance: 0.0,
        wallet_address: Some(address.to_string()),
        created_at: Utc::now(),
        bio: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_user_derives_username_from_address_suffix() {
        let user = synthesize_wallet_user("0x1234567890abcdef1234567890abcdef12345678");
        assert_eq!(user.username, "user_345678");
        assert_eq!(user.total_earned, 0.0);
        assert_eq!(user.followers, 0);
        assert!(user.email.is_empty());
    }
}
