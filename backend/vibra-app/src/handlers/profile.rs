use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::auth::gate::require_user;
use crate::data;
use crate::error::Result;
use crate::models::{User, Video};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileResponse {
    user: User,
    videos: Vec<Video>,
    liked: Vec<Video>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NotificationSettings {
    likes: bool,
    comments: bool,
    follows: bool,
    rewards: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrivacySettings {
    private_account: bool,
    show_wallet_balance: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsResponse {
    profile: User,
    notifications: NotificationSettings,
    privacy: PrivacySettings,
}

#[get("/profile")]
pub async fn profile(state: web::Data<AppState>) -> Result<HttpResponse> {
    let user = require_user(&state.session)?;

    let videos: Vec<Video> = data::MOCK_VIDEOS
        .iter()
        .filter(|v| v.user_id == user.id)
        .cloned()
        .collect();
    let liked: Vec<Video> = data::MOCK_VIDEOS
        .iter()
        .filter(|v| v.is_liked)
        .cloned()
        .collect();

    Ok(HttpResponse::Ok().json(ProfileResponse { user, videos, liked }))
}

#[get("/settings")]
pub async fn settings(state: web::Data<AppState>) -> Result<HttpResponse> {
    let user = require_user(&state.session)?;

    // Toggles live in page state only; the original never persists them.
    Ok(HttpResponse::Ok().json(SettingsResponse {
        profile: user,
        notifications: NotificationSettings {
            likes: true,
            comments: true,
            follows: true,
            rewards: true,
        },
        privacy: PrivacySettings {
            private_account: false,
            show_wallet_balance: true,
        },
    }))
}
