use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::gate::require_user;
use crate::error::Result;
use crate::feed::{NavKey, PlaybackControl};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollEvent {
    pub scroll_top: f64,
}

#[derive(Debug, Deserialize)]
pub struct KeyEvent {
    pub key: NavKey,
}

#[derive(Debug, Deserialize)]
pub struct PlaybackEvent {
    pub control: PlaybackControl,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScrollResponse {
    active_index: usize,
    is_scrolling: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyResponse {
    active_index: usize,
    moved: bool,
}

#[get("")]
pub async fn feed(state: web::Data<AppState>) -> Result<HttpResponse> {
    require_user(&state.session)?;
    Ok(HttpResponse::Ok().json(state.feed.snapshot()))
}

#[post("/scroll")]
pub async fn scroll(
    state: web::Data<AppState>,
    body: web::Json<ScrollEvent>,
) -> Result<HttpResponse> {
    require_user(&state.session)?;
    let active_index = state.feed.on_scroll(body.scroll_top);
    Ok(HttpResponse::Ok().json(ScrollResponse {
        active_index,
        is_scrolling: state.feed.is_scrolling(),
    }))
}

#[post("/keys")]
pub async fn keys(state: web::Data<AppState>, body: web::Json<KeyEvent>) -> Result<HttpResponse> {
    require_user(&state.session)?;
    let moved = state.feed.key_down(body.key);
    Ok(HttpResponse::Ok().json(KeyResponse {
        active_index: state.feed.active_index(),
        moved: moved.is_some(),
    }))
}

#[post("/videos/{id}/like")]
pub async fn like(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    require_user(&state.session)?;
    let video = state.feed.toggle_like(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(video))
}

#[post("/videos/{id}/share")]
pub async fn share(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    require_user(&state.session)?;
    let video = state.feed.share(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(video))
}

#[post("/videos/{id}/playback")]
pub async fn playback(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PlaybackEvent>,
) -> Result<HttpResponse> {
    require_user(&state.session)?;
    let card = state.feed.set_playback(&path.into_inner(), body.control)?;
    Ok(HttpResponse::Ok().json(card))
}
