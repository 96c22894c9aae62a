pub mod auth;
pub mod config;
pub mod data;
pub mod error;
pub mod feed;
pub mod handlers;
pub mod models;
pub mod services;
pub mod session;
pub mod state;
pub mod util;
pub mod validators;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
