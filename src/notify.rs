// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Seams towards the notification UI and the i18n catalog.
//!
//! The controller reports failures as localized toast messages. Both the
//! string catalog and the toast channel live outside this crate, so they
//! are consumed through traits narrow enough for tests to fake.

/// Message keys the controller can emit, matching the activities view's
/// catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    ErrorFetchingActivities,
    ErrorFailedFetchActivityTypes,
}

impl MessageKey {
    /// Catalog lookup key.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::ErrorFetchingActivities => "activitiesView.errorFetchingActivities",
            MessageKey::ErrorFailedFetchActivityTypes => {
                "activitiesView.errorFailedFetchActivityTypes"
            }
        }
    }

    /// English fallback when no catalog translation exists.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            MessageKey::ErrorFetchingActivities => "Error fetching activities",
            MessageKey::ErrorFailedFetchActivityTypes => "Failed to fetch activity types",
        }
    }
}

/// Localization catalog consumed by the controller.
pub trait Catalog {
    /// Map a message key to a display string.
    fn message(&self, key: MessageKey) -> String {
        key.fallback_text().to_string()
    }
}

/// Built-in English catalog.
#[derive(Debug, Default, Clone)]
pub struct EnglishCatalog;

impl Catalog for EnglishCatalog {}

/// Toast notification channel.
///
/// Only error severity exists here; the controller never pushes
/// success/info toasts.
pub trait Notifier {
    fn error(&self, message: &str);
}

/// Notifier that routes toasts into the tracing log, for headless use.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::error!(toast = %message, "User-facing error notification");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_catalog_uses_fallback_text() {
        let catalog = EnglishCatalog;
        assert_eq!(
            catalog.message(MessageKey::ErrorFetchingActivities),
            "Error fetching activities"
        );
    }

    #[test]
    fn test_message_keys_match_view_catalog() {
        assert_eq!(
            MessageKey::ErrorFailedFetchActivityTypes.as_str(),
            "activitiesView.errorFailedFetchActivityTypes"
        );
    }
}
