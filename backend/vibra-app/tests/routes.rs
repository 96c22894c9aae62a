//! Route-level tests: gating, navigation filtering and the simulated
//! operation surface.

use actix_web::{test, web, App};
use serde_json::{json, Value};
use tempfile::TempDir;

use vibra_app::config::{
    AppConfig, Config, FeedConfig, SessionConfig, UploadConfig, WalletConfig,
};
use vibra_app::{handlers, AppState};

fn test_config(dir: &TempDir) -> Config {
    Config {
        app: AppConfig {
            env: "test".to_string(),
            port: 0,
            log_level: "debug".to_string(),
        },
        session: SessionConfig {
            store_path: dir.path().join("vibra_user.json"),
            simulated_latency_ms: 0,
        },
        feed: FeedConfig {
            settle_ms: 150,
            viewport_height: 800.0,
        },
        wallet: WalletConfig {
            min_withdrawal: 10.0,
            withdrawal_fee: 2.0,
            usd_rate: 0.85,
            processing_delay_ms: 0,
        },
        upload: UploadConfig {
            progress_steps: 2,
            step_interval_ms: 1,
        },
    }
}

macro_rules! make_app {
    ($dir:expr) => {{
        let state = web::Data::new(AppState::new(test_config($dir)));
        test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(handlers::configure),
        )
        .await
    }};
}

macro_rules! login {
    ($app:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": $email, "password": "unchecked" }))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert!(resp.status().is_success(), "login failed for {}", $email);
    }};
}

#[actix_rt::test]
async fn health_is_public() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.status().is_success());
}

#[actix_rt::test]
async fn anonymous_visitors_land_on_the_landing_screen() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(body["screen"], "landing");

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/feed").to_request()).await;
    assert_eq!(resp.status(), 401);
}

#[actix_rt::test]
async fn login_unlocks_the_feed() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);
    login!(&app, "sarah@vibra.app");

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(body["screen"], "feed");

    let feed: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/api/feed").to_request())
            .await;
    assert_eq!(feed["videos"].as_array().unwrap().len(), 5);
    assert_eq!(feed["activeIndex"], 0);
}

#[actix_rt::test]
async fn staff_screens_deny_insufficient_roles() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);
    login!(&app, "sarah@vibra.app"); // creator

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/admin/overview").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 403);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/moderation/stats").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 403);

    // The screen route renders an access-denied view instead of failing.
    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/screens/admin").to_request(),
    )
    .await;
    assert_eq!(body["access"], "denied");
}

#[actix_rt::test]
async fn admin_reaches_the_admin_overview() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);
    login!(&app, "admin@vibra.app");

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/admin/overview").to_request(),
    )
    .await;
    assert_eq!(body["totalUsers"], 4);
    assert_eq!(body["totalVideos"], 5);
    assert_eq!(body["rewardsPaid"], 165.5);
    assert_eq!(body["withdrawalsTotal"], 70.0);
}

#[actix_rt::test]
async fn navigation_is_filtered_by_role() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);

    let anonymous: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/navigation").to_request(),
    )
    .await;
    assert!(anonymous.as_array().unwrap().is_empty());

    login!(&app, "marco@vibra.app"); // plain user
    let member: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/navigation").to_request(),
    )
    .await;
    let labels: Vec<&str> = member
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["label"].as_str().unwrap())
        .collect();
    assert!(labels.contains(&"Wallet"));
    assert!(labels.contains(&"Settings"));
    assert!(!labels.contains(&"Moderation"));
    assert!(!labels.contains(&"Admin"));

    login!(&app, "admin@vibra.app");
    let admin: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/navigation").to_request(),
    )
    .await;
    assert_eq!(admin.as_array().unwrap().len(), 7);
}

#[actix_rt::test]
async fn moderators_work_the_report_queue() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);
    login!(&app, "max@vibra.app");

    let pending: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/moderation/reports?status=pending")
            .to_request(),
    )
    .await;
    assert_eq!(pending.as_array().unwrap().len(), 2);

    let resolved: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/moderation/reports/report-4001/resolve")
            .to_request(),
    )
    .await;
    assert_eq!(resolved["status"], "resolved");

    let stats: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/moderation/stats").to_request(),
    )
    .await;
    assert_eq!(stats["pendingReports"], 1);
    assert_eq!(stats["resolvedReports"], 2);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/moderation/reports/report-4002/shred")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn withdrawals_validate_before_simulating() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);
    login!(&app, "sarah@vibra.app");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/wallet/withdraw")
            .set_json(json!({ "amount": 5.0 }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let receipt: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/wallet/withdraw")
            .set_json(json!({ "amount": 100.0 }))
            .to_request(),
    )
    .await;
    assert_eq!(receipt["status"], "completed");
    assert_eq!(receipt["fee"], 2.0);
}

#[actix_rt::test]
async fn wallet_history_shows_only_the_current_user() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);
    login!(&app, "sarah@vibra.app");

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/wallet").to_request(),
    )
    .await;
    let txs = body["transactions"].as_array().unwrap();
    assert_eq!(txs.len(), 3);
    assert!(txs.iter().all(|tx| tx["userId"] == "user-1001"));
    assert_eq!(body["summary"]["pendingRewards"], 45.75);
}

#[actix_rt::test]
async fn duplicate_registration_conflicts() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "email": "sarah@vibra.app",
                "password": "pw",
                "username": "someone_new"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 409);
}

#[actix_rt::test]
async fn wallet_login_round_trip() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/wallet")
            .set_json(json!({ "address": "" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/wallet")
            .set_json(json!({ "address": "0x1234567890abcdef1234567890abcdef12345678" }))
            .to_request(),
    )
    .await;
    assert_eq!(body["user"]["id"], "user-1001");
}

#[actix_rt::test]
async fn uploads_start_report_and_cancel() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);
    login!(&app, "sarah@vibra.app");

    let started: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/uploads")
            .set_json(json!({
                "title": "Layer 2 bridges compared",
                "tags": "crypto, l2",
                "fileName": "bridges.mp4"
            }))
            .to_request(),
    )
    .await;
    let id = started["id"].as_str().unwrap().to_string();

    let status: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/uploads/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(status["title"], "Layer 2 bridges compared");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/uploads/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 204);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/uploads/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn logout_returns_the_tab_to_anonymous() {
    let dir = TempDir::new().unwrap();
    let app = make_app!(&dir);
    login!(&app, "sarah@vibra.app");

    let resp = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/auth/logout").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 204);

    let session: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/auth/session").to_request(),
    )
    .await;
    assert!(session["user"].is_null());
}
