use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::auth::gate::{can_access, navigation_for, screen_requirement, NavSection};
use crate::error::{AppError, Result};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ScreenAccess {
    Granted,
    SigninRequired,
    Denied,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScreenView {
    screen: String,
    access: ScreenAccess,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NavEntry {
    label: &'static str,
    path: &'static str,
    section: NavSection,
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

/// Root route: landing page for anonymous visitors, the feed for everyone
/// else.
#[get("/")]
pub async fn root(state: web::Data<AppState>) -> HttpResponse {
    let screen_name = if state.session.is_authenticated() {
        "feed"
    } else {
        "landing"
    };
    HttpResponse::Ok().json(ScreenView {
        screen: screen_name.to_string(),
        access: ScreenAccess::Granted,
    })
}

/// Screen resolution with role gating. An insufficient role gets an
/// access-denied view; an anonymous visitor on a gated screen is pointed
/// back to sign-in. Both resolve with 200 - denial is a rendered view,
/// not a transport failure.
#[get("/screens/{name}")]
pub async fn screen(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let name = path.into_inner();
    let requirement = screen_requirement(&name)
        .ok_or_else(|| AppError::NotFound(format!("screen {}", name)))?;

    let role = state.session.role();
    let access = if can_access(role, requirement) {
        ScreenAccess::Granted
    } else if role.is_none() {
        ScreenAccess::SigninRequired
    } else {
        ScreenAccess::Denied
    };

    Ok(HttpResponse::Ok().json(ScreenView {
        screen: name,
        access,
    }))
}

/// Role-filtered navigation menu, from the same registry that gates the
/// screens.
#[get("/navigation")]
pub async fn navigation(state: web::Data<AppState>) -> HttpResponse {
    let items: Vec<NavEntry> = navigation_for(state.session.role())
        .into_iter()
        .map(|item| NavEntry {
            label: item.label,
            path: item.path,
            section: item.section,
        })
        .collect();
    HttpResponse::Ok().json(items)
}
