//! Wallet screen: balance summary, transaction history and the simulated
//! withdrawal flow.
//!
//! The ledger is read-only by contract - a withdrawal validates, waits out
//! a processing delay and resolves, but never writes a Transaction. The
//! failure path exists structurally and is unreachable: the simulated
//! settlement always succeeds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;
use validator::Validate;

use crate::config::WalletConfig;
use crate::data;
use crate::error::{AppError, Result};
use crate::models::{Transaction, TransactionStatus, User};
use crate::services::simulate;

/// Pending rewards shown on the dashboard. The reward pipeline that would
/// feed this is out of scope; the constant stands in for its output.
pub const PENDING_REWARDS: f64 = 45.75;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSummary {
    pub available_balance: f64,
    pub pending_rewards: f64,
    pub total_earned: f64,
    pub usd_estimate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct WithdrawRequest {
    #[validate(range(min = 0.0))]
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalReceipt {
    pub amount: f64,
    pub fee: f64,
    pub status: TransactionStatus,
    pub requested_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct WalletService {
    config: WalletConfig,
}

impl WalletService {
    pub fn new(config: WalletConfig) -> Self {
        Self { config }
    }

    pub fn summary_for(&self, user: &User) -> WalletSummary {
        WalletSummary {
            available_balance: user.wallet_balance,
            pending_rewards: PENDING_REWARDS,
            total_earned: user.total_earned,
            usd_estimate: user.wallet_balance * self.config.usd_rate,
            wallet_address: user.wallet_address.clone(),
        }
    }

    /// Ledger entries for one user, newest first.
    pub fn transactions_for(&self, user_id: &str) -> Vec<Transaction> {
        let mut txs: Vec<Transaction> = data::MOCK_TRANSACTIONS
            .iter()
            .filter(|tx| tx.user_id == user_id)
            .cloned()
            .collect();
        txs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        txs
    }

    /// Validate and simulate a withdrawal. Always succeeds once validation
    /// passes; the balance and ledger are left untouched.
    pub async fn withdraw(&self, user: &User, amount: f64) -> Result<WithdrawalReceipt> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::BadRequest("withdrawal amount must be positive".into()));
        }
        if amount < self.config.min_withdrawal {
            return Err(AppError::Validation(format!(
                "minimum withdrawal is {} VIBRA",
                self.config.min_withdrawal
            )));
        }
        if amount + self.config.withdrawal_fee > user.wallet_balance {
            return Err(AppError::Validation("insufficient balance".into()));
        }

        simulate::latency(Duration::from_millis(self.config.processing_delay_ms)).await;

        info!(
            "withdrawal processed: user={} amount={} fee={}",
            user.id, amount, self.config.withdrawal_fee
        );

        Ok(WithdrawalReceipt {
            amount,
            fee: self.config.withdrawal_fee,
            status: TransactionStatus::Completed,
            requested_at: Utc::now(),
        })
    }
}
