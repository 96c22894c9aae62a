use actix_web::{get, post, web, HttpResponse};
use tracing::debug;
use validator::Validate;

use crate::error::Result;
use crate::models::user::{LoginRequest, RegisterRequest, SessionResponse, WalletLoginRequest};
use crate::state::AppState;

#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    body.validate()?;
    debug!("login attempt for {}", body.email);
    let user = state.session.login(&body.email, &body.password).await?;
    Ok(HttpResponse::Ok().json(SessionResponse { user }))
}

#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    body.validate()?;
    let user = state
        .session
        .register(&body.email, &body.password, &body.username)
        .await?;
    Ok(HttpResponse::Created().json(SessionResponse { user }))
}

#[post("/wallet")]
pub async fn wallet_login(
    state: web::Data<AppState>,
    body: web::Json<WalletLoginRequest>,
) -> Result<HttpResponse> {
    let user = state.session.login_with_wallet(&body.address).await?;
    Ok(HttpResponse::Ok().json(SessionResponse { user }))
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>) -> HttpResponse {
    state.session.logout();
    HttpResponse::NoContent().finish()
}

#[get("/session")]
pub async fn session(state: web::Data<AppState>) -> HttpResponse {
    match state.session.current_user() {
        Some(user) => HttpResponse::Ok().json(SessionResponse { user }),
        None => HttpResponse::Ok().json(serde_json::json!({ "user": null })),
    }
}
