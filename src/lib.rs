// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity-Feed: client-side data layer for browsing fitness activities
//!
//! This crate provides the state and data-fetching layer behind an
//! activities list view: filtered, paginated, sorted pages of a user's
//! activities, plus a thin accessor for per-activity AI insights.
//! It owns UI-bound state and mediates REST calls; rendering and the
//! notification UI live elsewhere and consume it through narrow seams.

pub mod config;
pub mod debounce;
pub mod error;
pub mod models;
pub mod notify;
pub mod services;
