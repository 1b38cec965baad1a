//! Aulas classroom resource management
//!
//! Tracks rooms, the equipment inside them, reservations, damage reports and
//! repairs over a REST JSON API, and pushes change signals to connected
//! browsers over a WebSocket.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod ws;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
