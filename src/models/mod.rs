// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the activities feed.

pub mod activity;
pub mod insight;

pub use activity::{Activity, ActivityType, Filters, SortOrder, DEFAULT_SORT_COLUMN};
pub use insight::ActivityAiInsight;
