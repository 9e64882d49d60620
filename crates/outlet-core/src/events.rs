use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::outlets::Outlet;

/// A promotion parsed from one or more spreadsheet rows, ready for the
/// calendar, the filter bar, and the featured panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// Title as entered in the sheet, without the outlet prefix.
    pub title: String,
    pub start: NaiveDate,
    /// Last day of the promotion (inclusive). Used for display text.
    pub end: NaiveDate,
    /// `end + 1 day`, for range consumers that treat the end as exclusive.
    pub end_exclusive: NaiveDate,
    pub description: String,
    pub outlet: Outlet,
    /// One entry per contributing sheet row, in row order.
    pub items: Vec<EventItem>,
    pub thumbnail: String,
    /// Identifier from the sheet; may be a UUID or a short id.
    pub event_id: String,
}

impl NormalizedEvent {
    /// Calendar title, e.g. `"[송도] 나이키 시즌 오프"`.
    #[must_use]
    pub fn display_title(&self) -> String {
        format!("[{}] {}", self.outlet, self.title)
    }

    /// Returns `true` if `day` falls within `start..=end`.
    #[must_use]
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Non-blank brands across this event's items, in item order.
    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .map(|item| item.brand.as_str())
            .filter(|b| !b.trim().is_empty())
    }
}

/// A brand/product/price line under a promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventItem {
    pub brand: String,
    pub product: String,
    /// Free text as written in the sheet, e.g. `"50% 할인"`.
    pub price: String,
}
