// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Application error types.
//!
//! The controller layer recognizes exactly one failure class: a backend
//! request that did not succeed. Everything else is wrapped as an
//! internal error.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Backend API error: {0}")]
    Api(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, AppError>;
