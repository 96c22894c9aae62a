use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Avatar assigned to accounts created through register or wallet login.
pub const DEFAULT_AVATAR: &str =
    "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=400";

/// Platform role. The role is the sole authorization predicate in the app;
/// it is asserted by the session record, never cryptographically verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Creator,
    Moderator,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Creator => "creator",
            UserRole::Moderator => "moderator",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(UserRole::User),
            "creator" => Some(UserRole::Creator),
            "moderator" => Some(UserRole::Moderator),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// User model - identity plus profile plus earnings snapshot.
///
/// Ids are timestamp-based strings minted in process; there is no durable
/// identity beyond the single persisted session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar: String,
    pub role: UserRole,
    pub verified: bool,
    pub followers: u64,
    pub following: u64,
    pub total_earned: f64,
    pub wallet_balance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl User {
    pub fn has_wallet(&self) -> bool {
        self.wallet_address.is_some()
    }
}

/// Email login request. The password is accepted but never verified
/// against any stored credential - a surfaced limitation of the mock
/// authentication flow, not an omission to patch here.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 256))]
    pub password: String,
}

/// Registration request.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
    #[validate(
        length(min = 3, max = 32),
        custom(function = "crate::validators::validate_username_shape_validator")
    )]
    pub username: String,
}

/// Wallet login request. The only rejectable input is an empty address;
/// no signature is ever checked.
#[derive(Debug, Serialize, Deserialize)]
pub struct WalletLoginRequest {
    pub address: String,
}

/// Session payload returned by every auth operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: User,
}
