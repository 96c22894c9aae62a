use actix_web::{delete, get, post, web, HttpResponse};

use crate::auth::gate::require_user;
use crate::error::Result;
use crate::services::upload::UploadRequest;
use crate::state::AppState;

#[post("")]
pub async fn start(
    state: web::Data<AppState>,
    body: web::Json<UploadRequest>,
) -> Result<HttpResponse> {
    require_user(&state.session)?;
    let status = state.uploads.start(body.into_inner())?;
    Ok(HttpResponse::Accepted().json(status))
}

#[get("/{id}")]
pub async fn progress(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    require_user(&state.session)?;
    let status = state.uploads.progress(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(status))
}

#[delete("/{id}")]
pub async fn cancel(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    require_user(&state.session)?;
    state.uploads.cancel(&path.into_inner())?;
    Ok(HttpResponse::NoContent().finish())
}
