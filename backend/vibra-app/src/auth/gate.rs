//! Role gating for routes and navigation.
//!
//! Both the route guards and the navigation menu consume the same
//! `can_access` predicate over the same registry, so a screen can never be
//! reachable but hidden, or visible but forbidden.

use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{User, UserRole};
use crate::session::SessionStore;

pub const ALL_ROLES: &[UserRole] = &[
    UserRole::User,
    UserRole::Creator,
    UserRole::Moderator,
    UserRole::Admin,
];

pub const STAFF_ROLES: &[UserRole] = &[UserRole::Moderator, UserRole::Admin];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequirement {
    Public,
    Authenticated,
    Roles(&'static [UserRole]),
}

/// The sole authorization predicate in the app.
pub fn can_access(role: Option<UserRole>, requirement: RouteRequirement) -> bool {
    match requirement {
        RouteRequirement::Public => true,
        RouteRequirement::Authenticated => role.is_some(),
        RouteRequirement::Roles(allowed) => role.map(|r| allowed.contains(&r)).unwrap_or(false),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    Main,
    Administration,
}

#[derive(Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub section: NavSection,
    pub requirement: RouteRequirement,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        path: "/",
        section: NavSection::Main,
        requirement: RouteRequirement::Authenticated,
    },
    NavItem {
        label: "Discover",
        path: "/discover",
        section: NavSection::Main,
        requirement: RouteRequirement::Authenticated,
    },
    NavItem {
        label: "Wallet",
        path: "/wallet",
        section: NavSection::Main,
        requirement: RouteRequirement::Authenticated,
    },
    NavItem {
        label: "Profile",
        path: "/profile",
        section: NavSection::Main,
        requirement: RouteRequirement::Authenticated,
    },
    NavItem {
        label: "Moderation",
        path: "/moderation",
        section: NavSection::Administration,
        requirement: RouteRequirement::Roles(STAFF_ROLES),
    },
    NavItem {
        label: "Admin",
        path: "/admin",
        section: NavSection::Administration,
        requirement: RouteRequirement::Roles(&[UserRole::Admin]),
    },
    NavItem {
        label: "Settings",
        path: "/settings",
        section: NavSection::Administration,
        requirement: RouteRequirement::Roles(ALL_ROLES),
    },
];

/// Menu items visible to the given role, in registry order.
pub fn navigation_for(role: Option<UserRole>) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| can_access(role, item.requirement))
        .collect()
}

/// Look up the gating requirement of a screen by its route name
/// ("" or "home" for the root).
pub fn screen_requirement(name: &str) -> Option<RouteRequirement> {
    let name = name.trim_matches('/');
    NAV_ITEMS
        .iter()
        .find(|item| {
            let path = item.path.trim_matches('/');
            path == name || (path.is_empty() && name == "home")
        })
        .map(|item| item.requirement)
}

/// Guard helper: the current user, or 401.
pub fn require_user(session: &SessionStore) -> Result<User> {
    session.current_user().ok_or(AppError::Unauthorized)
}

/// Guard helper: the current user if their role is allowed, 401 when
/// anonymous, 403 otherwise.
pub fn require_role(session: &SessionStore, allowed: &'static [UserRole]) -> Result<User> {
    let user = require_user(session)?;
    if can_access(Some(user.role), RouteRequirement::Roles(allowed)) {
        Ok(user)
    } else {
        Err(AppError::Forbidden)
    }
}
