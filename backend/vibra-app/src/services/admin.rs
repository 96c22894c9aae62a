//! Admin dashboard aggregates over the fixed dataset.

use serde::Serialize;

use crate::data;
use crate::models::TransactionType;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformOverview {
    pub total_users: usize,
    pub total_videos: usize,
    pub rewards_paid: f64,
    pub withdrawals_total: f64,
    pub total_views: u64,
}

pub fn platform_overview() -> PlatformOverview {
    let rewards_paid = data::MOCK_TRANSACTIONS
        .iter()
        .filter(|tx| tx.kind == TransactionType::Reward)
        .map(|tx| tx.amount)
        .sum();

    let withdrawals_total = data::MOCK_TRANSACTIONS
        .iter()
        .filter(|tx| tx.kind == TransactionType::Withdrawal)
        .map(|tx| tx.amount)
        .sum::<f64>()
        .abs();

    PlatformOverview {
        total_users: data::MOCK_USERS.len(),
        total_videos: data::MOCK_VIDEOS.len(),
        rewards_paid,
        withdrawals_total,
        total_views: data::MOCK_VIDEOS.iter().map(|v| v.views).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_aggregates_the_dataset() {
        let overview = platform_overview();
        assert_eq!(overview.total_users, data::MOCK_USERS.len());
        assert_eq!(overview.total_videos, data::MOCK_VIDEOS.len());
        assert_eq!(overview.rewards_paid, 165.5);
        assert_eq!(overview.withdrawals_total, 70.0);
        assert!(overview.total_views > 0);
    }
}
