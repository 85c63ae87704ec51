// File: crates/chart-core/src/purchase.rs
// Summary: Purchase record value type, the unit of input for both charts.

use chrono::{DateTime, Datelike, TimeZone};
use serde::{Deserialize, Serialize};

/// Category used for records whose category is empty or whitespace only.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// A single purchase. Immutable once constructed; `amount` is in minor currency units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    id: i64,
    name: String,
    amount: i64,
    category: String,
    day_of_month: u32,
}

impl PurchaseRecord {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        amount: i64,
        category: impl Into<String>,
        day_of_month: u32,
    ) -> Self {
        Self { id, name: name.into(), amount, category: category.into(), day_of_month }
    }

    /// Build a record from a unix timestamp (seconds), deriving the day of month in `tz`.
    /// Returns `None` when the timestamp is outside chrono's representable range.
    pub fn from_unix_time<Tz: TimeZone>(
        id: i64,
        name: impl Into<String>,
        amount: i64,
        category: impl Into<String>,
        unix_secs: i64,
        tz: &Tz,
    ) -> Option<Self> {
        let day = DateTime::from_timestamp(unix_secs, 0)?.with_timezone(tz).day();
        Some(Self::new(id, name, amount, category, day))
    }

    pub fn id(&self) -> i64 { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn amount(&self) -> i64 { self.amount }
    pub fn category(&self) -> &str { &self.category }
    pub fn day_of_month(&self) -> u32 { self.day_of_month }

    /// Grouping key: the category, or [`UNKNOWN_CATEGORY`] when it is blank.
    pub fn category_key(&self) -> &str {
        if self.category.trim().is_empty() { UNKNOWN_CATEGORY } else { &self.category }
    }
}
