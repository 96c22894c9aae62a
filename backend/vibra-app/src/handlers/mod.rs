pub mod admin;
pub mod auth;
pub mod discover;
pub mod feed;
pub mod moderation;
pub mod pages;
pub mod profile;
pub mod uploads;
pub mod wallet;

use actix_web::web;

/// Register every route of the app. Shared between the server binary and
/// the route-level tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(pages::health)
        .service(pages::root)
        .service(pages::screen)
        .service(
            web::scope("/api")
                .service(pages::navigation)
                .service(profile::profile)
                .service(profile::settings)
                .service(
                    web::scope("/auth")
                        .service(auth::login)
                        .service(auth::register)
                        .service(auth::wallet_login)
                        .service(auth::logout)
                        .service(auth::session),
                )
                .service(
                    web::scope("/feed")
                        .service(feed::feed)
                        .service(feed::scroll)
                        .service(feed::keys)
                        .service(feed::like)
                        .service(feed::share)
                        .service(feed::playback),
                )
                .service(
                    web::scope("/discover")
                        .service(discover::search)
                        .service(discover::tags),
                )
                .service(
                    web::scope("/wallet")
                        .service(wallet::wallet)
                        .service(wallet::withdraw),
                )
                .service(
                    web::scope("/uploads")
                        .service(uploads::start)
                        .service(uploads::progress)
                        .service(uploads::cancel),
                )
                .service(
                    web::scope("/moderation")
                        .service(moderation::reports)
                        .service(moderation::stats)
                        .service(moderation::act),
                )
                .service(web::scope("/admin").service(admin::overview)),
        );
}
