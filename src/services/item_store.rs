//! Itinerary Session
//!
//! The single owned aggregate behind one authoring session: trip details,
//! the day-by-day line items, tax configuration and the display currency.
//! Every mutation goes through the methods here so the sell-price rule can
//! never be bypassed, and every aggregate total is derived fresh from
//! current item state.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::catalog::SuggestedPlan;
use crate::models::currency::Currency;
use crate::models::item::{ItemDraft, ItemUpdate, ItineraryItem};
use crate::models::tax::TaxConfig;
use crate::models::trip::TripDetails;
use crate::services::catalog_service::CatalogService;
use crate::services::pricing_service::PricingService;
use crate::services::tax_service::TaxService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Aggregate totals for the pricing screen, always in base currency.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ItinerarySession {
    pub details: TripDetails,
    items: Vec<ItineraryItem>,
    pub tax_config: TaxConfig,
    pub display_currency: Currency,
}

impl ItinerarySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-populated from a saved package being edited.
    pub fn from_saved(details: TripDetails, drafts: Vec<ItemDraft>) -> Self {
        let mut session = Self {
            details,
            ..Self::default()
        };
        session.replace_all_items(drafts);
        session
    }

    pub fn items(&self) -> &[ItineraryItem] {
        &self.items
    }

    /// Append a new item with its sell price computed from the draft's
    /// pricing fields. Duplicate day/title pairs are allowed. Returns the
    /// generated item id.
    pub fn add_item(&mut self, draft: ItemDraft) -> String {
        let mut item = draft.into_item();
        item.sell_price = Self::priced(&item);
        let id = item.id.clone();
        debug!("added {} item '{}' on day {}", item.item_type.label(), item.title, item.day);
        self.items.push(item);
        id
    }

    /// Merge a partial update into the item with the given id; silent no-op
    /// when the id is unknown. The sell price is recomputed unconditionally,
    /// which is cheap and keeps the derivation in one place.
    pub fn update_item(&mut self, id: &str, update: ItemUpdate) {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            debug!("update for unknown item {} ignored", id);
            return;
        };

        if let Some(day) = update.day {
            item.day = day;
        }
        if let Some(order) = update.order {
            item.order = Some(order);
        }
        if let Some(title) = update.title {
            item.title = title;
        }
        if let Some(description) = update.description {
            item.description = Some(description);
        }
        if let Some(time) = update.time {
            item.time = Some(time);
        }
        if let Some(duration) = update.duration {
            item.duration = Some(duration);
        }
        if let Some(net_cost) = update.net_cost {
            item.net_cost = net_cost;
        }
        if let Some(pct) = update.base_markup_percent {
            item.base_markup_percent = pct;
        }
        if let Some(flat) = update.extra_markup_flat {
            item.extra_markup_flat = flat;
        }
        if let Some(quantity) = update.quantity {
            item.quantity = quantity;
        }
        if let Some(room_type_id) = update.room_type_id {
            item.room_type_id = Some(room_type_id);
        }
        if let Some(meal_plan_id) = update.meal_plan_id {
            item.meal_plan_id = Some(meal_plan_id);
        }

        item.sell_price = Self::priced(item);
    }

    /// Silent no-op when the id is unknown.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Wholesale replacement, used when an external generator delivers a
    /// complete day-by-day plan. Sell prices are recomputed for every item
    /// so an untrusted source can never inject drifted prices.
    pub fn replace_all_items(&mut self, drafts: Vec<ItemDraft>) {
        self.items = drafts
            .into_iter()
            .map(|draft| {
                let mut item = draft.into_item();
                item.sell_price = Self::priced(&item);
                item
            })
            .collect();
        debug!("item collection replaced, {} items", self.items.len());
    }

    /// Outcome handler for the asynchronous suggestion collaborator. A
    /// successful result triggers exactly one `replace_all_items`; a failure
    /// leaves the collection untouched and is passed back for display.
    pub fn apply_suggested_plans(
        &mut self,
        outcome: Result<Vec<SuggestedPlan>, EngineError>,
    ) -> Result<usize, EngineError> {
        match outcome {
            Ok(plans) => {
                let drafts = CatalogService::items_from_suggestions(&plans);
                let count = drafts.len();
                self.replace_all_items(drafts);
                Ok(count)
            }
            Err(err) => {
                warn!("suggested plan rejected, keeping current items: {}", err);
                Err(err)
            }
        }
    }

    /// Rewrite the `order` field of the listed items on one day. Day
    /// membership and pricing fields are never touched; ids that do not
    /// match an item on that day are skipped.
    pub fn reorder_items(&mut self, day: u32, ordered_ids: &[String]) {
        for (position, id) in ordered_ids.iter().enumerate() {
            if let Some(item) = self
                .items
                .iter_mut()
                .find(|i| i.day == day && i.id == *id)
            {
                item.order = Some(position as i64);
            }
        }
    }

    /// Swap an item with its display-order neighbor within its day. Moving
    /// the first item up or the last item down is a safe no-op, repeatable
    /// without effect.
    pub fn move_item(&mut self, id: &str, direction: MoveDirection) {
        let Some(day) = self.items.iter().find(|i| i.id == id).map(|i| i.day) else {
            return;
        };
        let mut ids: Vec<String> = self.items_for_day(day).iter().map(|i| i.id.clone()).collect();
        let Some(idx) = ids.iter().position(|i| i == id) else {
            return;
        };

        match direction {
            MoveDirection::Up if idx > 0 => ids.swap(idx, idx - 1),
            MoveDirection::Down if idx + 1 < ids.len() => ids.swap(idx, idx + 1),
            _ => return,
        }
        self.reorder_items(day, &ids);
    }

    /// Items assigned to one day, in display order: `order` ascending, then
    /// `time` ascending, missing values sorting first. The day planner and
    /// the package materializer both rely on this exact ordering.
    pub fn items_for_day(&self, day: u32) -> Vec<&ItineraryItem> {
        let mut day_items: Vec<&ItineraryItem> =
            self.items.iter().filter(|i| i.day == day).collect();
        day_items.sort_by(|a, b| {
            let key_a = (a.order.unwrap_or(i64::MIN), a.time.as_deref().unwrap_or(""));
            let key_b = (b.order.unwrap_or(i64::MIN), b.time.as_deref().unwrap_or(""));
            key_a.cmp(&key_b)
        });
        day_items
    }

    /// Items whose day bucket exceeds the current trip duration, typically
    /// after the author shortened the trip. They are kept, never deleted;
    /// a UI should flag them as out of range.
    pub fn orphaned_items(&self) -> Vec<&ItineraryItem> {
        self.items.iter().filter(|i| i.day > self.details.duration).collect()
    }

    pub fn day_numbers(&self) -> std::ops::RangeInclusive<u32> {
        1..=self.details.duration.max(1)
    }

    /// Sum of sell prices across all items, in base currency.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|i| i.sell_price).sum()
    }

    pub fn tax_amount(&self) -> f64 {
        TaxService::compute_tax(self.subtotal(), &self.items, &self.tax_config)
    }

    pub fn grand_total(&self) -> f64 {
        self.subtotal() + self.tax_amount()
    }

    /// Sum of net cost at quantity; the materializer's cost basis, distinct
    /// from the sell-price subtotal.
    pub fn total_cost(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.net_cost * i.quantity as f64)
            .sum()
    }

    pub fn totals(&self) -> Totals {
        let subtotal = self.subtotal();
        let tax_amount = self.tax_amount();
        Totals {
            subtotal,
            tax_amount,
            grand_total: subtotal + tax_amount,
        }
    }

    fn priced(item: &ItineraryItem) -> f64 {
        PricingService::compute_sell_price(
            item.net_cost,
            item.base_markup_percent,
            item.extra_markup_flat,
            item.quantity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{SuggestedActivity, SuggestedPlan};
    use crate::models::item::ItemType;

    fn draft(title: &str, day: u32, net_cost: f64) -> ItemDraft {
        let mut d = ItemDraft::new(ItemType::Activity, day, title);
        d.net_cost = net_cost;
        d
    }

    #[test]
    fn test_add_computes_sell_price() {
        let mut session = ItinerarySession::new();
        let id = session.add_item(draft("Safari", 1, 10000.0));
        let item = session.items().iter().find(|i| i.id == id).unwrap();
        assert_eq!(item.sell_price, 11500.0);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut session = ItinerarySession::new();
        session.add_item(draft("City tour", 2, 500.0));
        session.add_item(draft("City tour", 2, 500.0));
        assert_eq!(session.items_for_day(2).len(), 2);
    }

    #[test]
    fn test_update_recomputes_sell_price() {
        let mut session = ItinerarySession::new();
        let id = session.add_item(draft("Safari", 1, 10000.0));

        session.update_item(
            &id,
            ItemUpdate {
                quantity: Some(2),
                ..ItemUpdate::default()
            },
        );
        assert_eq!(session.items()[0].sell_price, 23000.0);

        // non-pricing update still leaves the invariant intact
        session.update_item(
            &id,
            ItemUpdate {
                title: Some("Night safari".to_string()),
                ..ItemUpdate::default()
            },
        );
        assert_eq!(session.items()[0].sell_price, 23000.0);
        assert_eq!(session.items()[0].title, "Night safari");
    }

    #[test]
    fn test_sell_price_invariant_survives_unrelated_updates() {
        let mut session = ItinerarySession::new();
        let a = session.add_item(draft("A", 1, 2000.0));
        let b = session.add_item(draft("B", 2, 10000.0));

        // churn item A's pricing and item B's descriptive fields
        session.update_item(&a, ItemUpdate { net_cost: Some(3500.0), ..ItemUpdate::default() });
        session.update_item(&a, ItemUpdate { quantity: Some(4), ..ItemUpdate::default() });
        session.update_item(&b, ItemUpdate { title: Some("B renamed".to_string()), ..ItemUpdate::default() });
        session.update_item(&a, ItemUpdate { extra_markup_flat: Some(250.0), ..ItemUpdate::default() });

        // every item still satisfies the formula over its own four inputs
        for item in session.items() {
            assert_eq!(
                item.sell_price,
                PricingService::compute_sell_price(
                    item.net_cost,
                    item.base_markup_percent,
                    item.extra_markup_flat,
                    item.quantity
                )
            );
        }
        let b_item = session.items().iter().find(|i| i.id == b).unwrap();
        assert_eq!(b_item.sell_price, 11500.0);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut session = ItinerarySession::new();
        session.add_item(draft("Safari", 1, 10000.0));
        let before = session.totals();

        session.update_item("missing", ItemUpdate { net_cost: Some(1.0), ..ItemUpdate::default() });
        session.remove_item("missing");

        assert_eq!(session.items().len(), 1);
        assert_eq!(session.totals(), before);
    }

    #[test]
    fn test_replace_all_recomputes_prices() {
        let mut session = ItinerarySession::new();
        session.add_item(draft("Old", 1, 100.0));
        session.replace_all_items(vec![draft("New A", 1, 1000.0), draft("New B", 2, 2000.0)]);

        assert_eq!(session.items().len(), 2);
        for item in session.items() {
            assert_eq!(
                item.sell_price,
                PricingService::compute_sell_price(
                    item.net_cost,
                    item.base_markup_percent,
                    item.extra_markup_flat,
                    item.quantity
                )
            );
        }
    }

    #[test]
    fn test_day_ordering() {
        let mut session = ItinerarySession::new();
        let mut early = draft("Morning walk", 1, 0.0);
        early.time = Some("08:00".to_string());
        let mut late = draft("Dinner", 1, 0.0);
        late.time = Some("20:00".to_string());
        let untimed = draft("Check-in", 1, 0.0);

        session.add_item(late);
        session.add_item(early);
        session.add_item(untimed);

        let titles: Vec<&str> = session.items_for_day(1).iter().map(|i| i.title.as_str()).collect();
        // no order set: missing time sorts first, then by time
        assert_eq!(titles, vec!["Check-in", "Morning walk", "Dinner"]);
    }

    #[test]
    fn test_explicit_order_wins_over_time() {
        let mut session = ItinerarySession::new();
        let a = session.add_item(draft("A", 1, 0.0));
        let b = session.add_item(draft("B", 1, 0.0));
        session.reorder_items(1, &[b.clone(), a.clone()]);

        let ids: Vec<&str> = session.items_for_day(1).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec![b.as_str(), a.as_str()]);
    }

    #[test]
    fn test_move_item_boundaries_are_noops() {
        let mut session = ItinerarySession::new();
        let first = session.add_item(draft("First", 1, 100.0));
        let last = session.add_item(draft("Last", 1, 200.0));
        session.reorder_items(1, &[first.clone(), last.clone()]);
        let before = session.totals();

        session.move_item(&first, MoveDirection::Up);
        session.move_item(&first, MoveDirection::Up);
        session.move_item(&last, MoveDirection::Down);

        let ids: Vec<&str> = session.items_for_day(1).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec![first.as_str(), last.as_str()]);
        assert_eq!(session.totals(), before);
        assert!(session.items().iter().all(|i| i.day == 1));
    }

    #[test]
    fn test_move_item_swaps_neighbors() {
        let mut session = ItinerarySession::new();
        let a = session.add_item(draft("A", 1, 0.0));
        let b = session.add_item(draft("B", 1, 0.0));
        let c = session.add_item(draft("C", 1, 0.0));
        session.reorder_items(1, &[a.clone(), b.clone(), c.clone()]);

        session.move_item(&c, MoveDirection::Up);
        let ids: Vec<&str> = session.items_for_day(1).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec![a.as_str(), c.as_str(), b.as_str()]);
    }

    #[test]
    fn test_reorder_ignores_other_days() {
        let mut session = ItinerarySession::new();
        let day1 = session.add_item(draft("Day 1 item", 1, 0.0));
        let day2 = session.add_item(draft("Day 2 item", 2, 0.0));

        session.reorder_items(1, &[day2.clone(), day1.clone()]);

        let d2 = session.items().iter().find(|i| i.id == day2).unwrap();
        assert_eq!(d2.order, None);
        assert_eq!(d2.day, 2);
    }

    #[test]
    fn test_aggregates() {
        let mut session = ItinerarySession::new();
        session.add_item(draft("A", 1, 10000.0));
        session.add_item(draft("B", 2, 10000.0));
        session.tax_config = TaxConfig {
            cgst_percent: 9.0,
            sgst_percent: 9.0,
            ..TaxConfig::default()
        };

        let totals = session.totals();
        assert_eq!(totals.subtotal, 23000.0);
        assert_eq!(totals.tax_amount, 4140.0);
        assert_eq!(totals.grand_total, 27140.0);
        assert_eq!(session.total_cost(), 20000.0);

        session.tax_config.gst_on_total = false;
        let totals = session.totals();
        assert_eq!(totals.tax_amount, 540.0);
        assert_eq!(totals.grand_total, 23540.0);
    }

    #[test]
    fn test_duration_shrink_keeps_orphans() {
        let mut session = ItinerarySession::new();
        session.details.duration = 5;
        session.add_item(draft("Late activity", 5, 800.0));

        session.details.duration = 3;
        assert_eq!(session.items().len(), 1);
        let orphans = session.orphaned_items();
        assert_eq!(orphans.len(), 1);
        assert_eq!(orphans[0].day, 5);
    }

    #[test]
    fn test_suggestion_failure_leaves_items_untouched() {
        let mut session = ItinerarySession::new();
        session.add_item(draft("Keep me", 1, 900.0));

        let err = session
            .apply_suggested_plans(Err(EngineError::Suggestion("model timeout".to_string())))
            .unwrap_err();
        assert!(matches!(err, EngineError::Suggestion(_)));
        assert_eq!(session.items().len(), 1);
        assert_eq!(session.items()[0].title, "Keep me");
    }

    #[test]
    fn test_suggestion_success_replaces_items() {
        let mut session = ItinerarySession::new();
        session.add_item(draft("Old", 1, 900.0));

        let plans = vec![SuggestedPlan {
            day: 1,
            activities: vec![SuggestedActivity {
                time: Some("09:00".to_string()),
                description: "Old Town: guided heritage walk".to_string(),
                cost: 1200.0,
            }],
        }];
        let count = session.apply_suggested_plans(Ok(plans)).unwrap();
        assert_eq!(count, 1);
        assert_eq!(session.items().len(), 1);
        assert_eq!(session.items()[0].title, "Old Town");
        assert_eq!(session.items()[0].sell_price, 1380.0);
    }
}
