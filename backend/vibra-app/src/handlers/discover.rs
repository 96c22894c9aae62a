use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::gate::require_user;
use crate::data;
use crate::error::Result;
use crate::models::Video;
use crate::services::discover::{self, DiscoverCategory, TRENDING_TAGS};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DiscoverQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: DiscoverCategory,
}

#[derive(Debug, Serialize)]
struct DiscoverResponse {
    videos: Vec<Video>,
    total: usize,
}

#[get("")]
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<DiscoverQuery>,
) -> Result<HttpResponse> {
    require_user(&state.session)?;
    let videos = discover::search(&data::MOCK_VIDEOS, &query.q, query.category);
    let total = videos.len();
    Ok(HttpResponse::Ok().json(DiscoverResponse { videos, total }))
}

#[get("/tags")]
pub async fn tags(state: web::Data<AppState>) -> Result<HttpResponse> {
    require_user(&state.session)?;
    Ok(HttpResponse::Ok().json(TRENDING_TAGS))
}
