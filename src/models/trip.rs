use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trip-level descriptive state for one authoring session. Day-count
/// derivations elsewhere hang off `duration`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TripDetails {
    pub title: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Trip length in days, 1-indexed day buckets run 1..=duration.
    /// Shrinking it does not delete items on now-out-of-range days.
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub adults: u32,
    pub children: u32,
}

impl Default for TripDetails {
    fn default() -> Self {
        Self {
            title: String::new(),
            destination: String::new(),
            start_date: None,
            duration: 1,
            cover_image: None,
            adults: 2,
            children: 0,
        }
    }
}
