//! Shared server state
//!
//! Built once at startup and handed to every axum handler behind an `Arc`.

use chrono::{DateTime, Utc};
use crate::config::Settings;
use crate::services::ServiceFactory;

#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,
    pub services: ServiceFactory,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(settings: Settings, services: ServiceFactory) -> Self {
        Self {
            settings,
            services,
            started_at: Utc::now(),
        }
    }
}
