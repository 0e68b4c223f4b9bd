use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Second, independent markup applied at materialization time to produce the
/// listed retail price. Deliberately unrelated to the per-item markups and
/// the pricing-stage grand total.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(tag = "mode", content = "value")]
pub enum FinalMarkup {
    #[serde(rename = "percent")]
    Percent(f64),
    #[serde(rename = "flat")]
    Flat(f64),
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PackageDay {
    pub day: u32,
    pub description: String,
}

/// The persistable package document handed to the storage collaborator at
/// the end of a successful authoring session.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TravelPackage {
    pub id: String,
    pub title: String,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub duration: u32,
    pub adults: u32,
    pub children: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub days: Vec<PackageDay>,
    /// Sum of net cost at quantity across items; not the sell-price subtotal.
    pub total_cost: f64,
    /// Headline retail price: `total_cost` plus the final markup.
    pub final_price: f64,
    pub created_at: DateTime<Utc>,
}
