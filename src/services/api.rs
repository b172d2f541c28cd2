// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Backend REST API client for the activities feed.
//!
//! Handles:
//! - Activity type enumeration
//! - Paginated, filtered, sorted activity list fetches
//! - Filtered activity counts
//! - Per-activity AI insight lookups

use crate::config::ApiConfig;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityAiInsight, ActivityType, Filters, SortOrder};
use serde::Deserialize;

/// Parameters for one paginated activity list request.
#[derive(Debug, Clone)]
pub struct ActivityPageQuery {
    pub user_id: u64,
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
    pub filters: Filters,
    pub sort_by: String,
    pub sort_order: SortOrder,
}

/// The slice of the backend the activities controller consumes.
///
/// The controller is generic over this trait so tests can drive it with
/// an in-memory fake instead of a live backend.
#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    /// `GET activity-types`
    async fn activity_types(&self) -> Result<Vec<ActivityType>>;

    /// `GET activities` (paginated)
    async fn user_activities_page(&self, query: ActivityPageQuery) -> Result<Vec<Activity>>;

    /// `GET activities/count` under the same filter set (sort-independent)
    async fn user_activities_count(&self, user_id: u64, filters: &Filters) -> Result<u64>;
}

/// Backend API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl ApiClient {
    /// Create a new API client from connection settings.
    pub fn new(base_url: String, access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            access_token,
        }
    }

    /// Create a client from environment-loaded settings.
    pub fn from_config(config: ApiConfig) -> Self {
        Self::new(config.base_url, config.access_token)
    }

    /// All insights attached to one activity.
    pub async fn activity_ai_insights(&self, activity_id: u64) -> Result<Vec<ActivityAiInsight>> {
        let url = format!(
            "{}/activities_ai_insights/activity_id/{}",
            self.base_url, activity_id
        );
        self.get_json(&url, &[]).await
    }

    /// A single insight by its own id, `None` if the backend has no such
    /// record.
    pub async fn activity_ai_insight_by_id(
        &self,
        insight_id: u64,
    ) -> Result<Option<ActivityAiInsight>> {
        let url = format!("{}/activities_ai_insights/{}", self.base_url, insight_id);
        match self.get_json(&url, &[]).await {
            Ok(insight) => Ok(Some(insight)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Query parameters shared by the list and count endpoints.
    fn filter_params(filters: &Filters) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(activity_type) = &filters.selected_type {
            params.push(("type", activity_type.clone()));
        }
        if let Some(start_date) = filters.start_date {
            params.push(("start_date", start_date.to_string()));
        }
        if let Some(end_date) = filters.end_date {
            params.push(("end_date", end_date.to_string()));
        }
        if !filters.name_search.is_empty() {
            params.push(("name_search", filters.name_search.clone()));
        }
        params
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(params)
            .send()
            .await
            .map_err(|e| AppError::Api(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Map a non-success response status to the error it yields.
    fn status_error(status: reqwest::StatusCode, path: &str, body: &str) -> AppError {
        if status.as_u16() == 401 {
            return AppError::Api("Session token rejected".to_string());
        }

        if status.as_u16() == 404 {
            return AppError::NotFound(path.to_string());
        }

        AppError::Api(format!("HTTP {}: {}", status, body))
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let path = response.url().path().to_string();
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &path, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Api(format!("JSON parse error: {}", e)))
    }
}

impl ActivitiesApi for ApiClient {
    async fn activity_types(&self) -> Result<Vec<ActivityType>> {
        let url = format!("{}/activity-types", self.base_url);
        self.get_json(&url, &[]).await
    }

    async fn user_activities_page(&self, query: ActivityPageQuery) -> Result<Vec<Activity>> {
        let url = format!("{}/activities", self.base_url);

        let mut params = vec![
            ("user_id", query.user_id.to_string()),
            ("page", query.page.to_string()),
            ("per_page", query.per_page.to_string()),
        ];
        params.extend(Self::filter_params(&query.filters));
        params.push(("sort_by", query.sort_by.clone()));
        params.push(("sort_order", query.sort_order.as_str().to_string()));

        self.get_json(&url, &params).await
    }

    async fn user_activities_count(&self, user_id: u64, filters: &Filters) -> Result<u64> {
        let url = format!("{}/activities/count", self.base_url);

        let mut params = vec![("user_id", user_id.to_string())];
        params.extend(Self::filter_params(filters));

        self.get_json(&url, &params).await
    }
}
