//! Fixed in-memory dataset loaded once at process start.
//!
//! Every screen reads from these statics; the only entities created at
//! runtime are Users minted by register and wallet login, and those are
//! never written back here.

use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::models::{
    Comment, Report, ReportContentType, ReportStatus, Transaction, TransactionStatus,
    TransactionType, User, UserRole, Video,
};

fn ts(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .expect("mock timestamps are valid")
}

pub static MOCK_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: "user-1001".to_string(),
            username: "cryptoqueen".to_string(),
            email: "sarah@vibra.app".to_string(),
            avatar: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_string(),
            role: UserRole::Creator,
            verified: true,
            followers: 125_400,
            following: 342,
            total_earned: 15_420.5,
            wallet_balance: 2_340.75,
            wallet_address: Some("0x1234567890abcdef1234567890abcdef12345678".to_string()),
            created_at: ts(2023, 3, 12, 9, 15),
            bio: Some("Making web3 make sense, one short video at a time.".to_string()),
        },
        User {
            id: "user-1002".to_string(),
            username: "blockbeats".to_string(),
            email: "marco@vibra.app".to_string(),
            avatar: "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_string(),
            role: UserRole::User,
            verified: false,
            followers: 8_920,
            following: 1_205,
            total_earned: 890.25,
            wallet_balance: 156.8,
            wallet_address: Some("0xabcdefabcdefabcdefabcdefabcdefabcdefabcd".to_string()),
            created_at: ts(2023, 8, 30, 18, 40),
            bio: Some("Charts by day, beats by night.".to_string()),
        },
        User {
            id: "user-1003".to_string(),
            username: "modmax".to_string(),
            email: "max@vibra.app".to_string(),
            avatar: "https://images.pexels.com/photos/91227/pexels-photo-91227.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_string(),
            role: UserRole::Moderator,
            verified: true,
            followers: 2_150,
            following: 88,
            total_earned: 320.0,
            wallet_balance: 75.5,
            wallet_address: None,
            created_at: ts(2023, 5, 2, 11, 0),
            bio: None,
        },
        User {
            id: "user-1004".to_string(),
            username: "vibra_admin".to_string(),
            email: "admin@vibra.app".to_string(),
            avatar: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_string(),
            role: UserRole::Admin,
            verified: true,
            followers: 54,
            following: 12,
            total_earned: 0.0,
            wallet_balance: 0.0,
            wallet_address: None,
            created_at: ts(2023, 1, 15, 8, 0),
            bio: Some("Platform operations.".to_string()),
        },
    ]
});

pub static MOCK_VIDEOS: Lazy<Vec<Video>> = Lazy::new(|| {
    let sarah = &MOCK_USERS[0];
    let marco = &MOCK_USERS[1];
    vec![
        Video {
            id: "video-2001".to_string(),
            user_id: sarah.id.clone(),
            username: sarah.username.clone(),
            avatar: sarah.avatar.clone(),
            title: "Bitcoin Halving Explained in 60 Seconds".to_string(),
            description: "Everything the halving changes for miners and why the supply schedule matters."
                .to_string(),
            video_url: "https://videos.vibra.app/video-2001.mp4".to_string(),
            thumbnail_url: "https://images.pexels.com/photos/844124/pexels-photo-844124.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            duration: 58,
            likes: 12_400,
            comments: 842,
            shares: 1_210,
            views: 148_000,
            tags: vec!["bitcoin".to_string(), "crypto".to_string(), "education".to_string()],
            created_at: ts(2024, 4, 18, 14, 30),
            is_liked: false,
            rewards: 420.5,
        },
        Video {
            id: "video-2002".to_string(),
            user_id: sarah.id.clone(),
            username: sarah.username.clone(),
            avatar: sarah.avatar.clone(),
            title: "NFT Royalties Are Not Dead".to_string(),
            description: "Three marketplaces still paying creators and how their enforcement actually works."
                .to_string(),
            video_url: "https://videos.vibra.app/video-2002.mp4".to_string(),
            thumbnail_url: "https://images.pexels.com/photos/1266808/pexels-photo-1266808.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            duration: 74,
            likes: 5_230,
            comments: 310,
            shares: 405,
            views: 61_500,
            tags: vec!["nft".to_string(), "crypto".to_string()],
            created_at: ts(2024, 5, 2, 10, 5),
            is_liked: true,
            rewards: 150.2,
        },
        Video {
            id: "video-2003".to_string(),
            user_id: marco.id.clone(),
            username: marco.username.clone(),
            avatar: marco.avatar.clone(),
            title: "My Day Trading Desk Tour".to_string(),
            description: "Monitors, hotkeys and the one indicator I refuse to trade without.".to_string(),
            video_url: "https://videos.vibra.app/video-2003.mp4".to_string(),
            thumbnail_url: "https://images.pexels.com/photos/159888/pexels-photo-159888.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            duration: 45,
            likes: 980,
            comments: 77,
            shares: 64,
            views: 12_300,
            tags: vec!["trading".to_string(), "setup".to_string()],
            created_at: ts(2024, 5, 21, 19, 45),
            is_liked: false,
            rewards: 32.8,
        },
        Video {
            id: "video-2004".to_string(),
            user_id: sarah.id.clone(),
            username: sarah.username.clone(),
            avatar: sarah.avatar.clone(),
            title: "DeFi Yield Farming for Beginners".to_string(),
            description: "Impermanent loss, pool tokens and the three questions to ask before depositing."
                .to_string(),
            video_url: "https://videos.vibra.app/video-2004.mp4".to_string(),
            thumbnail_url: "https://images.pexels.com/photos/730547/pexels-photo-730547.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            duration: 89,
            likes: 7_850,
            comments: 512,
            shares: 890,
            views: 95_400,
            tags: vec!["defi".to_string(), "crypto".to_string(), "education".to_string()],
            created_at: ts(2024, 3, 9, 16, 20),
            is_liked: false,
            rewards: 265.0,
        },
        Video {
            id: "video-2005".to_string(),
            user_id: marco.id.clone(),
            username: marco.username.clone(),
            avatar: marco.avatar.clone(),
            title: "Top 5 Wallet Security Mistakes".to_string(),
            description: "Seed phrases in screenshots and four other habits draining wallets right now."
                .to_string(),
            video_url: "https://videos.vibra.app/video-2005.mp4".to_string(),
            thumbnail_url: "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg?auto=compress&cs=tinysrgb&w=800"
                .to_string(),
            duration: 66,
            likes: 3_410,
            comments: 198,
            shares: 702,
            views: 40_100,
            tags: vec!["security".to_string(), "blockchain".to_string()],
            created_at: ts(2024, 5, 28, 8, 10),
            is_liked: false,
            rewards: 88.6,
        },
    ]
});

pub static MOCK_COMMENTS: Lazy<Vec<Comment>> = Lazy::new(|| {
    let marco = &MOCK_USERS[1];
    let max = &MOCK_USERS[2];
    vec![
        Comment {
            id: "comment-5001".to_string(),
            user_id: marco.id.clone(),
            username: marco.username.clone(),
            avatar: marco.avatar.clone(),
            video_id: "video-2001".to_string(),
            content: "This finally made the halving click for me.".to_string(),
            likes: 320,
            created_at: ts(2024, 4, 18, 15, 2),
            is_liked: false,
        },
        Comment {
            id: "comment-5002".to_string(),
            user_id: marco.id.clone(),
            username: marco.username.clone(),
            avatar: marco.avatar.clone(),
            video_id: "video-2002".to_string(),
            content: "your takes are trash, quit posting".to_string(),
            likes: 2,
            created_at: ts(2024, 5, 2, 11, 30),
            is_liked: false,
        },
        Comment {
            id: "comment-5003".to_string(),
            user_id: max.id.clone(),
            username: max.username.clone(),
            avatar: max.avatar.clone(),
            video_id: "video-2004".to_string(),
            content: "Pinning this one for every newcomer who asks about pools.".to_string(),
            likes: 87,
            created_at: ts(2024, 3, 10, 9, 0),
            is_liked: true,
        },
    ]
});

pub static MOCK_TRANSACTIONS: Lazy<Vec<Transaction>> = Lazy::new(|| {
    vec![
        Transaction {
            id: "tx-3001".to_string(),
            user_id: "user-1001".to_string(),
            kind: TransactionType::Reward,
            amount: 120.5,
            description: "Weekly creator reward distribution".to_string(),
            status: TransactionStatus::Completed,
            tx_hash: Some("0x9f2c4e1ab05d7733a1c2b8de06f41c9e8a55d210".to_string()),
            created_at: ts(2024, 5, 27, 0, 5),
        },
        Transaction {
            id: "tx-3002".to_string(),
            user_id: "user-1001".to_string(),
            kind: TransactionType::Withdrawal,
            amount: -50.0,
            description: "Withdrawal to connected wallet".to_string(),
            status: TransactionStatus::Completed,
            tx_hash: Some("0x71be00da6cc2f1a3449cf0cd4b8722a0c1f3d9b4".to_string()),
            created_at: ts(2024, 5, 20, 13, 45),
        },
        Transaction {
            id: "tx-3003".to_string(),
            user_id: "user-1001".to_string(),
            kind: TransactionType::Tip,
            amount: 15.25,
            description: "Tip from @blockbeats".to_string(),
            status: TransactionStatus::Pending,
            tx_hash: None,
            created_at: ts(2024, 5, 29, 21, 12),
        },
        Transaction {
            id: "tx-3004".to_string(),
            user_id: "user-1002".to_string(),
            kind: TransactionType::Reward,
            amount: 45.0,
            description: "Weekly creator reward distribution".to_string(),
            status: TransactionStatus::Completed,
            tx_hash: Some("0x0ac2d94be177c60d2f1a88b3cc4e5091fd23ab76".to_string()),
            created_at: ts(2024, 5, 27, 0, 5),
        },
        Transaction {
            id: "tx-3005".to_string(),
            user_id: "user-1002".to_string(),
            kind: TransactionType::Withdrawal,
            amount: -20.0,
            description: "Withdrawal to connected wallet".to_string(),
            status: TransactionStatus::Failed,
            tx_hash: None,
            created_at: ts(2024, 5, 25, 17, 30),
        },
    ]
});

pub static MOCK_REPORTS: Lazy<Vec<Report>> = Lazy::new(|| {
    vec![
        Report {
            id: "report-4001".to_string(),
            reporter_id: "user-1002".to_string(),
            content_id: "video-2003".to_string(),
            content_type: ReportContentType::Video,
            reason: "Misleading content".to_string(),
            description: "Claims guaranteed returns from the setup shown.".to_string(),
            status: ReportStatus::Pending,
            created_at: ts(2024, 5, 22, 10, 15),
        },
        Report {
            id: "report-4002".to_string(),
            reporter_id: "user-1001".to_string(),
            content_id: "comment-5002".to_string(),
            content_type: ReportContentType::Comment,
            reason: "Harassment".to_string(),
            description: "Repeated hostile replies on my uploads.".to_string(),
            status: ReportStatus::Pending,
            created_at: ts(2024, 5, 2, 12, 0),
        },
        Report {
            id: "report-4003".to_string(),
            reporter_id: "user-1003".to_string(),
            content_id: "user-1002".to_string(),
            content_type: ReportContentType::User,
            reason: "Spam".to_string(),
            description: "Mass-posting referral links in comments.".to_string(),
            status: ReportStatus::Resolved,
            created_at: ts(2024, 4, 30, 9, 40),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dataset_ids_are_unique() {
        let mut seen = HashSet::new();
        for id in MOCK_USERS
            .iter()
            .map(|u| &u.id)
            .chain(MOCK_VIDEOS.iter().map(|v| &v.id))
            .chain(MOCK_COMMENTS.iter().map(|c| &c.id))
            .chain(MOCK_TRANSACTIONS.iter().map(|t| &t.id))
            .chain(MOCK_REPORTS.iter().map(|r| &r.id))
        {
            assert!(seen.insert(id.clone()), "duplicate mock id: {}", id);
        }
    }

    #[test]
    fn videos_reference_known_users() {
        for video in MOCK_VIDEOS.iter() {
            assert!(
                MOCK_USERS.iter().any(|u| u.id == video.user_id),
                "video {} owned by unknown user {}",
                video.id,
                video.user_id
            );
        }
    }

    #[test]
    fn reports_reference_known_content() {
        for report in MOCK_REPORTS.iter() {
            let exists = match report.content_type {
                ReportContentType::Video => {
                    MOCK_VIDEOS.iter().any(|v| v.id == report.content_id)
                }
                ReportContentType::Comment => {
                    MOCK_COMMENTS.iter().any(|c| c.id == report.content_id)
                }
                ReportContentType::User => MOCK_USERS.iter().any(|u| u.id == report.content_id),
            };
            assert!(exists, "report {} targets unknown content", report.id);
        }
    }

    #[test]
    fn every_role_is_represented() {
        for role in [
            UserRole::User,
            UserRole::Creator,
            UserRole::Moderator,
            UserRole::Admin,
        ] {
            assert!(MOCK_USERS.iter().any(|u| u.role == role));
        }
    }
}
