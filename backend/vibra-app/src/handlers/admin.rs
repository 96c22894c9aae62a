use actix_web::{get, web, HttpResponse};

use crate::auth::gate::require_role;
use crate::error::Result;
use crate::models::UserRole;
use crate::services::admin::platform_overview;
use crate::state::AppState;

#[get("/overview")]
pub async fn overview(state: web::Data<AppState>) -> Result<HttpResponse> {
    require_role(&state.session, &[UserRole::Admin])?;
    Ok(HttpResponse::Ok().json(platform_overview()))
}
