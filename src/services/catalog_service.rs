//! Service Catalog Adapter
//!
//! Pure mappers from external master-data records (hotels, activities,
//! transports) to partially-populated item drafts, plus the static
//! placeholders for item types that have no catalog source. Each mapper
//! freezes a snapshot of the source record on the draft; later catalog
//! edits never reach existing items.

use crate::models::catalog::{
    ActivityRecord, CatalogRecord, HotelRecord, SuggestedPlan, TransportRecord,
};
use crate::models::item::{CatalogSnapshot, ItemDraft, ItemType};

pub struct CatalogService;

impl CatalogService {
    /// Hotel night on the day currently being edited. Net cost defaults to
    /// one night at the catalog rate.
    pub fn item_from_hotel(record: &HotelRecord, day: u32) -> ItemDraft {
        let mut draft = ItemDraft::new(ItemType::Hotel, day, record.name.clone());
        draft.net_cost = record.price_per_night;
        draft.master_id = Some(record.id.clone());
        draft.master_data = Some(CatalogSnapshot::Hotel(record.clone()));
        draft
    }

    pub fn item_from_activity(record: &ActivityRecord, day: u32) -> ItemDraft {
        let mut draft = ItemDraft::new(ItemType::Activity, day, record.name.clone());
        draft.net_cost = record.cost;
        draft.description = record.description.clone();
        draft.duration = record.duration.clone();
        draft.master_id = Some(record.id.clone());
        draft.master_data = Some(CatalogSnapshot::Activity(record.clone()));
        draft
    }

    pub fn item_from_transport(record: &TransportRecord, day: u32) -> ItemDraft {
        let mut draft = ItemDraft::new(ItemType::Transport, day, record.name.clone());
        draft.net_cost = record.base_rate;
        draft.master_id = Some(record.id.clone());
        draft.master_data = Some(CatalogSnapshot::Transport(record.clone()));
        draft
    }

    /// Flights have no catalog source; the author fills in the details.
    pub fn flight_placeholder(day: u32) -> ItemDraft {
        ItemDraft::new(ItemType::Flight, day, "Flight")
    }

    /// Free-text note, never priced.
    pub fn note_placeholder(day: u32) -> ItemDraft {
        ItemDraft::new(ItemType::Note, day, "Note")
    }

    /// Map a generated day-by-day plan to activity drafts. The title is the
    /// text before the first colon of the description; the remainder, when
    /// present, becomes the item description.
    pub fn items_from_suggestions(plans: &[SuggestedPlan]) -> Vec<ItemDraft> {
        plans
            .iter()
            .flat_map(|plan| {
                plan.activities.iter().map(move |activity| {
                    let (title, rest) = match activity.description.split_once(':') {
                        Some((head, tail)) => (head.trim(), Some(tail.trim())),
                        None => (activity.description.trim(), None),
                    };
                    let mut draft = ItemDraft::new(ItemType::Activity, plan.day, title);
                    draft.description = rest
                        .filter(|r| !r.is_empty())
                        .map(|r| r.to_string());
                    draft.time = activity.time.clone();
                    draft.net_cost = activity.cost;
                    draft
                })
            })
            .collect()
    }

    /// Keep only records a UI may offer to the author: Active status only.
    pub fn offerable<T: CatalogRecord>(records: &[T]) -> Vec<&T> {
        records
            .iter()
            .filter(|r| r.record_status().is_offerable())
            .collect()
    }
}
