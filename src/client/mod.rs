//! Typed client for the Bookshelf API
//!
//! Mirrors the browser front end: a GraphQL data-access layer that attaches
//! the stored bearer token, a session-wide authentication context, the route
//! table with its protected-route gate, and one controller per page holding
//! that page's form and validation state.

pub mod api;
pub mod auth;
pub mod operations;
pub mod pages;
pub mod routes;
pub mod storage;

use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use thiserror::Error;

pub use api::ApiClient;
pub use auth::{AuthContext, AuthState};
pub use routes::{gate, Gate, Route};
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore};

const DEFAULT_API_URL: &str = "http://localhost:4000/graphql";

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error message reported by the server, verbatim
    #[error("{0}")]
    Api(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Empty response from server")]
    EmptyResponse,
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint
    pub api_url: String,
    /// File holding the persisted session token
    pub token_path: PathBuf,
}

impl ClientConfig {
    /// Load from `BOOKSHELF_CLIENT_API_URL` / `BOOKSHELF_CLIENT_TOKEN_PATH`
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default(
                "token_path",
                default_token_path().to_string_lossy().into_owned(),
            )?
            .add_source(Environment::with_prefix("BOOKSHELF_CLIENT"))
            .build()?
            .try_deserialize()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_path: default_token_path(),
        }
    }
}

fn default_token_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("bookshelf")
        .join("storage.json")
}
