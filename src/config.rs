// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Feed and API configuration.
//!
//! The controller never reads ambient/global state: the current user id
//! and the server-configured page size are injected here at construction
//! time, so a view hands the controller everything it needs up front.

use std::env;

/// Number of records per page when the server settings don't provide one.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Per-view feed configuration, injected by the caller.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Id of the user whose activities are listed.
    pub user_id: u64,
    /// Server-configured page size.
    pub num_records_per_page: u32,
}

impl FeedConfig {
    /// Build a feed config from the auth context's user id and the
    /// server settings' page size (falling back to 25 if unset).
    pub fn new(user_id: u64, num_records_per_page: Option<u32>) -> Self {
        Self {
            user_id,
            num_records_per_page: num_records_per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Backend API connection settings, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend REST API.
    pub base_url: String,
    /// Bearer token from the auth context.
    pub access_token: String,
}

impl ApiConfig {
    /// Load API settings from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            base_url: env::var("ACTIVITY_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api/v1".to_string()),
            access_token: env::var("ACTIVITY_API_TOKEN")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("ACTIVITY_API_TOKEN"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
