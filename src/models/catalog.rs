use serde::{Deserialize, Serialize};

/// Master-data records come from an external catalog and are read-only here.
/// Only `Active` records may be offered to an author.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub enum RecordStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "inactive")]
    Inactive,
}

impl RecordStatus {
    pub fn is_offerable(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}

/// Implemented by every master-data record type so offerability checks do
/// not have to restate the status rule per call site.
pub trait CatalogRecord {
    fn record_status(&self) -> &RecordStatus;
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HotelRecord {
    pub id: String,
    pub name: String,
    pub rating: f32,
    pub amenities: Vec<String>,
    pub price_per_night: f64,
    pub location_id: Option<String>,
    pub image: Option<String>,
    pub status: RecordStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ActivityRecord {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub cost: f64,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub status: RecordStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TransportRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub transport_type: String,
    pub capacity: Option<u32>,
    pub base_rate: f64,
    pub status: RecordStatus,
}

impl CatalogRecord for HotelRecord {
    fn record_status(&self) -> &RecordStatus {
        &self.status
    }
}

impl CatalogRecord for ActivityRecord {
    fn record_status(&self) -> &RecordStatus {
        &self.status
    }
}

impl CatalogRecord for TransportRecord {
    fn record_status(&self) -> &RecordStatus {
        &self.status
    }
}

/// One day of a machine-generated plan, as returned by the suggestion
/// collaborator. The engine never cares how the plan was produced.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SuggestedPlan {
    pub day: u32,
    pub activities: Vec<SuggestedActivity>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SuggestedActivity {
    pub time: Option<String>,
    pub description: String,
    pub cost: f64,
}
