//! Bookshelf
//!
//! A book catalog served over GraphQL, with email/password accounts and
//! bearer-token authentication, plus a typed client that drives the same
//! flows the browser front end performs.

use std::sync::Arc;

pub mod api;
pub mod client;
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
    pub services: Arc<services::Services>,
    pub schema: api::graphql::BookSchema,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        let schema = api::graphql::build_schema(services.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            schema,
        }
    }
}
