use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::auth::gate::{require_role, STAFF_ROLES};
use crate::error::{AppError, Result};
use crate::models::{ModerationAction, ReportStatus};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportsQuery {
    pub status: Option<String>,
}

#[get("/reports")]
pub async fn reports(
    state: web::Data<AppState>,
    query: web::Query<ReportsQuery>,
) -> Result<HttpResponse> {
    require_role(&state.session, STAFF_ROLES)?;

    let status = match query.status.as_deref() {
        None => None,
        Some(raw) => Some(
            ReportStatus::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown report status {:?}", raw)))?,
        ),
    };

    Ok(HttpResponse::Ok().json(state.moderation.reports(status)))
}

#[get("/stats")]
pub async fn stats(state: web::Data<AppState>) -> Result<HttpResponse> {
    require_role(&state.session, STAFF_ROLES)?;
    Ok(HttpResponse::Ok().json(state.moderation.stats()))
}

#[post("/reports/{id}/{action}")]
pub async fn act(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    require_role(&state.session, STAFF_ROLES)?;

    let (report_id, action) = path.into_inner();
    let action = ModerationAction::parse(&action)
        .ok_or_else(|| AppError::BadRequest(format!("unknown moderation action {:?}", action)))?;

    let view = state.moderation.apply(&report_id, action)?;
    Ok(HttpResponse::Ok().json(view))
}
