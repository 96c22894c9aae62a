use actix_web::{get, post, web, HttpResponse};
use serde::Serialize;
use validator::Validate;

use crate::auth::gate::require_user;
use crate::error::Result;
use crate::models::Transaction;
use crate::services::wallet::{WalletSummary, WithdrawRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct WalletResponse {
    summary: WalletSummary,
    transactions: Vec<Transaction>,
}

#[get("")]
pub async fn wallet(state: web::Data<AppState>) -> Result<HttpResponse> {
    let user = require_user(&state.session)?;
    Ok(HttpResponse::Ok().json(WalletResponse {
        summary: state.wallet.summary_for(&user),
        transactions: state.wallet.transactions_for(&user.id),
    }))
}

#[post("/withdraw")]
pub async fn withdraw(
    state: web::Data<AppState>,
    body: web::Json<WithdrawRequest>,
) -> Result<HttpResponse> {
    let user = require_user(&state.session)?;
    body.validate()?;
    let receipt = state.wallet.withdraw(&user, body.amount).await?;
    Ok(HttpResponse::Ok().json(receipt))
}
