//! HBnB vacation rental listing service
//!
//! A REST JSON API over users, places, amenities and reviews, backed by
//! in-memory stores and a facade that enforces cross-entity rules.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub facade: Arc<services::Facade>,
}

impl AppState {
    /// State with empty stores
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new();
        Self {
            config: Arc::new(config),
            facade: Arc::new(services::Facade::new(repository)),
        }
    }
}
