// Axis labels derived from the shared timeframe
use std::sync::Arc;

use chrono::{DateTime, Locale, Utc};

use crate::application::catalog_store::CatalogStore;

/// Display locale for all axis labels, fixed for the session.
const DISPLAY_LOCALE: Locale = Locale::fr_FR;
const HOUR_FORMAT: &str = "%-d %b %Y %H:%M";
const DAY_FORMAT: &str = "%-d %B %Y";

/// Length of the hourly chart window.
pub const HOUR_AXIS_LEN: usize = 24;

pub fn hour_label(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .format_localized(HOUR_FORMAT, DISPLAY_LOCALE)
        .to_string()
}

/// Calendar-day key shared by the day axis and the daily output buckets.
pub fn day_label(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .format_localized(DAY_FORMAT, DISPLAY_LOCALE)
        .to_string()
}

#[derive(Clone)]
pub struct AxisService {
    store: Arc<CatalogStore>,
}

impl AxisService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// The first 24 hours of the timeframe as display labels. A shorter
    /// timeframe yields fewer labels, not an error.
    pub fn hourly_labels(&self) -> Vec<String> {
        self.store
            .timeframe()
            .iter()
            .take(HOUR_AXIS_LEN)
            .map(hour_label)
            .collect()
    }

    /// Distinct calendar-day labels over the whole timeframe, in
    /// first-occurrence order. Assumes the timeframe is chronologically
    /// sorted, which the catalog loader enforces.
    pub fn daily_labels(&self) -> Vec<String> {
        let mut days: Vec<String> = Vec::new();
        for timestamp in self.store.timeframe() {
            let day = day_label(timestamp);
            if !days.contains(&day) {
                days.push(day);
            }
        }
        days
    }
}
