// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity list models: the records the backend returns and the
//! filter/sort state applied to list queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default list ordering: newest activities first.
pub const DEFAULT_SORT_COLUMN: &str = "start_time";

/// One activity record as returned by the backend.
///
/// The feed only types the identity and default-sort fields it forwards;
/// everything else is display-only payload kept opaque in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Backend activity id
    pub id: u64,
    /// Activity name/title
    pub name: String,
    /// Activity type (category id/name)
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// Start date/time (ISO 8601)
    pub start_time: Option<String>,
    /// Remaining display fields, not interpreted by this layer
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Enumerable activity category used to populate the type filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityType {
    pub id: Option<u64>,
    pub name: String,
    pub display_name: String,
}

/// Filter set applied to activity list and count queries.
///
/// All fields reset together on "clear filters".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Selected activity type, `None` when the filter is unset
    pub selected_type: Option<String>,
    /// Inclusive start of the date range
    pub start_date: Option<NaiveDate>,
    /// Inclusive end of the date range
    pub end_date: Option<NaiveDate>,
    /// Case-insensitive substring match on the activity name
    pub name_search: String,
}

impl Filters {
    /// Whether every filter is at its default (unset) value.
    pub fn is_empty(&self) -> bool {
        *self == Filters::default()
    }
}

/// Sort direction for a list column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire/query representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// The opposite direction. Toggling twice is a no-op.
    pub fn toggled(&self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}
