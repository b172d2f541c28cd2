// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Read-only accessor for per-activity AI insights.
//!
//! Deliberately thin: no local state, no caching, and unlike the
//! activities controller it does not convert failures into toasts.
//! Errors propagate to the caller, who decides how to surface them.

use crate::error::Result;
use crate::models::ActivityAiInsight;
use crate::services::ApiClient;

/// Accessor for AI-generated activity insights.
#[derive(Clone)]
pub struct AiInsightsService {
    client: ApiClient,
}

impl AiInsightsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch all insights generated for one activity.
    pub async fn insights_for_activity(&self, activity_id: u64) -> Result<Vec<ActivityAiInsight>> {
        self.client.activity_ai_insights(activity_id).await
    }

    /// Look up a single insight by its own id.
    pub async fn insight_by_id(&self, insight_id: u64) -> Result<Option<ActivityAiInsight>> {
        self.client.activity_ai_insight_by_id(insight_id).await
    }
}
