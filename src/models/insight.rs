// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! AI-generated activity insight model.

use serde::{Deserialize, Serialize};

/// One AI-generated insight attached to an activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityAiInsight {
    pub id: Option<u64>,
    pub activity_id: Option<u64>,
    /// Generated insight body
    pub insight_text: Option<String>,
    /// Model that produced the insight (e.g. "gpt-4o")
    pub model_used: Option<String>,
    /// Creation timestamp (ISO 8601)
    pub created_at: Option<String>,
}
