// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Services module - data-fetching and list-state layer.

pub mod activities;
pub mod api;
pub mod insights;

pub use activities::ActivitiesController;
pub use api::{ActivitiesApi, ActivityPageQuery, ApiClient};
pub use insights::AiInsightsService;
