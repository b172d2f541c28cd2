// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Shared test doubles: an in-memory backend and a recording toast
//! channel for driving the activities controller without a server.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use activity_feed::error::{AppError, Result};
use activity_feed::models::{Activity, ActivityType, Filters};
use activity_feed::notify::Notifier;
use activity_feed::services::{ActivitiesApi, ActivityPageQuery};

/// Backend state shared between a test and the controller under test.
#[derive(Default)]
pub struct FakeBackend {
    pub types: Mutex<Vec<ActivityType>>,
    pub page: Mutex<Vec<Activity>>,
    pub count: AtomicUsize,
    pub fail_types: AtomicBool,
    pub fail_list: AtomicBool,
    pub list_calls: AtomicUsize,
    pub count_calls: AtomicUsize,
    pub last_query: Mutex<Option<ActivityPageQuery>>,
}

/// Cloneable handle implementing the backend seam.
#[derive(Clone, Default)]
pub struct FakeApi(pub Arc<FakeBackend>);

impl ActivitiesApi for FakeApi {
    async fn activity_types(&self) -> Result<Vec<ActivityType>> {
        if self.0.fail_types.load(Ordering::SeqCst) {
            return Err(AppError::Api("HTTP 502: bad gateway".to_string()));
        }
        Ok(self.0.types.lock().unwrap().clone())
    }

    async fn user_activities_page(&self, query: ActivityPageQuery) -> Result<Vec<Activity>> {
        self.0.list_calls.fetch_add(1, Ordering::SeqCst);
        *self.0.last_query.lock().unwrap() = Some(query);
        if self.0.fail_list.load(Ordering::SeqCst) {
            return Err(AppError::Api("HTTP 500: boom".to_string()));
        }
        Ok(self.0.page.lock().unwrap().clone())
    }

    async fn user_activities_count(&self, _user_id: u64, _filters: &Filters) -> Result<u64> {
        self.0.count_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.0.count.load(Ordering::SeqCst) as u64)
    }
}

/// Toast channel that records every error message it receives.
#[derive(Clone, Default)]
pub struct RecordingNotifier(Arc<Mutex<Vec<String>>>);

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

/// Minimal activity record as the backend would serialize it.
pub fn activity(id: u64, name: &str) -> Activity {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "type": "cycling",
        "start_time": "2026-08-01T06:30:00Z",
        "distance": 1000.0
    }))
    .unwrap()
}
