use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::catalog::{ActivityRecord, HotelRecord, TransportRecord};

/// Closed set of line-item kinds. Default markup, icons and required fields
/// all branch on this tag, so it stays an enum rather than anything open.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    #[serde(rename = "flight")]
    Flight,
    #[serde(rename = "hotel")]
    Hotel,
    #[serde(rename = "activity")]
    Activity,
    #[serde(rename = "transport")]
    Transport,
    #[serde(rename = "note")]
    Note,
    #[serde(rename = "visa")]
    Visa,
    #[serde(rename = "guide")]
    Guide,
    #[serde(rename = "other")]
    Other,
}

impl ItemType {
    /// Percentage markup pre-filled when an item of this type is created.
    pub fn default_markup_percent(&self) -> f64 {
        match self {
            ItemType::Flight => 10.0,
            ItemType::Note => 0.0,
            _ => 15.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Flight => "Flight",
            ItemType::Hotel => "Hotel",
            ItemType::Activity => "Activity",
            ItemType::Transport => "Transport",
            ItemType::Note => "Note",
            ItemType::Visa => "Visa",
            ItemType::Guide => "Guide",
            ItemType::Other => "Other",
        }
    }
}

/// Copy of the catalog record an item was created from, frozen at creation
/// time. Later catalog edits do not flow into existing items; `master_id`
/// is the reference, this is the snapshot.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "kind")]
pub enum CatalogSnapshot {
    #[serde(rename = "hotel")]
    Hotel(HotelRecord),
    #[serde(rename = "activity")]
    Activity(ActivityRecord),
    #[serde(rename = "transport")]
    Transport(TransportRecord),
}

/// One bookable or informational line within a trip.
///
/// `sell_price` is derived and only ever written by the session store:
/// `round2(net_cost * (1 + base_markup_percent/100) + extra_markup_flat) * quantity`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// 1-indexed day bucket. May exceed the trip duration after a duration
    /// shrink; such items are preserved and flagged, never auto-removed.
    pub day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub net_cost: f64,
    pub base_markup_percent: f64,
    pub extra_markup_flat: f64,
    pub quantity: u32,
    pub sell_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_data: Option<CatalogSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_plan_id: Option<String>,
}

/// Input shape for creating items. There is deliberately no `sell_price`
/// field here, so callers cannot supply one that bypasses the pricing rule.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItemDraft {
    pub item_type: ItemType,
    pub day: u32,
    pub order: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub net_cost: f64,
    pub base_markup_percent: f64,
    pub extra_markup_flat: f64,
    pub quantity: u32,
    pub master_id: Option<String>,
    pub master_data: Option<CatalogSnapshot>,
    pub room_type_id: Option<String>,
    pub meal_plan_id: Option<String>,
}

impl ItemDraft {
    /// Bare draft of the given type on the given day, with the per-type
    /// default markup applied.
    pub fn new(item_type: ItemType, day: u32, title: impl Into<String>) -> Self {
        Self {
            item_type,
            day,
            order: None,
            title: title.into(),
            description: None,
            time: None,
            duration: None,
            net_cost: 0.0,
            base_markup_percent: item_type.default_markup_percent(),
            extra_markup_flat: 0.0,
            quantity: 1,
            master_id: None,
            master_data: None,
            room_type_id: None,
            meal_plan_id: None,
        }
    }

    /// Promote the draft to a full item. `sell_price` starts at zero and is
    /// always recomputed by the store before the item becomes visible.
    pub(crate) fn into_item(self) -> ItineraryItem {
        ItineraryItem {
            id: Uuid::new_v4().to_string(),
            item_type: self.item_type,
            day: self.day,
            order: self.order,
            title: self.title,
            description: self.description,
            time: self.time,
            duration: self.duration,
            net_cost: self.net_cost,
            base_markup_percent: self.base_markup_percent,
            extra_markup_flat: self.extra_markup_flat,
            quantity: self.quantity,
            sell_price: 0.0,
            master_id: self.master_id,
            master_data: self.master_data,
            room_type_id: self.room_type_id,
            meal_plan_id: self.meal_plan_id,
        }
    }
}

/// Partial update for an existing item. `None` fields are left unchanged.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ItemUpdate {
    pub day: Option<u32>,
    pub order: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub net_cost: Option<f64>,
    pub base_markup_percent: Option<f64>,
    pub extra_markup_flat: Option<f64>,
    pub quantity: Option<u32>,
    pub room_type_id: Option<String>,
    pub meal_plan_id: Option<String>,
}
