use crate::models::item::ItineraryItem;
use crate::models::tax::TaxConfig;
use crate::services::pricing_service::round2;

pub struct TaxService;

impl TaxService {
    /// Tax amount for the current item set.
    ///
    /// GST (cgst + sgst + igst) applies to the full subtotal when
    /// `gst_on_total` is set, otherwise to the aggregate margin
    /// Σ(sell_price − net_cost × quantity). TCS is always charged on the
    /// full subtotal, independent of the toggle. A negative margin is
    /// passed through as-is.
    pub fn compute_tax(subtotal: f64, items: &[ItineraryItem], config: &TaxConfig) -> f64 {
        let taxable_base = if config.gst_on_total {
            subtotal
        } else {
            Self::margin_sum(items)
        };

        let gst_amount = taxable_base * config.gst_rate() / 100.0;
        let tcs_amount = subtotal * config.tcs_percent / 100.0;

        round2(gst_amount + tcs_amount)
    }

    /// Aggregate margin across items. Empty input yields 0, which makes
    /// margin-basis tax zero no matter the configured rates.
    pub fn margin_sum(items: &[ItineraryItem]) -> f64 {
        items
            .iter()
            .map(|item| item.sell_price - item.net_cost * item.quantity as f64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::{ItemDraft, ItemType};
    use crate::services::pricing_service::PricingService;

    fn priced_item(net_cost: f64, markup: f64, quantity: u32) -> ItineraryItem {
        let mut draft = ItemDraft::new(ItemType::Activity, 1, "Test activity");
        draft.net_cost = net_cost;
        draft.base_markup_percent = markup;
        draft.quantity = quantity;
        let mut item = draft.into_item();
        item.sell_price = PricingService::compute_sell_price(
            item.net_cost,
            item.base_markup_percent,
            item.extra_markup_flat,
            item.quantity,
        );
        item
    }

    #[test]
    fn test_gst_on_total() {
        let items = vec![priced_item(10000.0, 15.0, 1), priced_item(10000.0, 15.0, 1)];
        let subtotal: f64 = items.iter().map(|i| i.sell_price).sum();
        assert_eq!(subtotal, 23000.0);

        let config = TaxConfig {
            cgst_percent: 9.0,
            sgst_percent: 9.0,
            ..TaxConfig::default()
        };
        assert_eq!(TaxService::compute_tax(subtotal, &items, &config), 4140.0);
    }

    #[test]
    fn test_gst_on_margin() {
        let items = vec![priced_item(10000.0, 15.0, 1), priced_item(10000.0, 15.0, 1)];
        let subtotal: f64 = items.iter().map(|i| i.sell_price).sum();

        let config = TaxConfig {
            cgst_percent: 9.0,
            sgst_percent: 9.0,
            gst_on_total: false,
            ..TaxConfig::default()
        };
        // margin = 2 × (11500 − 10000) = 3000; 18% of that
        assert_eq!(TaxService::compute_tax(subtotal, &items, &config), 540.0);
    }

    #[test]
    fn test_tcs_ignores_basis_toggle() {
        let items = vec![priced_item(10000.0, 15.0, 1)];
        let subtotal = 11500.0;
        let config = TaxConfig {
            tcs_percent: 5.0,
            gst_on_total: false,
            ..TaxConfig::default()
        };
        // no GST rates set, so only TCS on the full subtotal remains
        assert_eq!(TaxService::compute_tax(subtotal, &items, &config), 575.0);
    }

    #[test]
    fn test_basis_toggle_delta() {
        let items = vec![priced_item(8000.0, 20.0, 2), priced_item(3000.0, 10.0, 1)];
        let subtotal: f64 = items.iter().map(|i| i.sell_price).sum();
        let margin = TaxService::margin_sum(&items);

        let on_total = TaxConfig {
            cgst_percent: 9.0,
            sgst_percent: 9.0,
            tcs_percent: 5.0,
            ..TaxConfig::default()
        };
        let on_margin = TaxConfig {
            gst_on_total: false,
            ..on_total.clone()
        };

        let delta = TaxService::compute_tax(subtotal, &items, &on_total)
            - TaxService::compute_tax(subtotal, &items, &on_margin);
        let expected = round2((subtotal - margin) * 0.18);
        assert!((delta - expected).abs() < 0.011);
    }

    #[test]
    fn test_empty_items_margin_basis() {
        let config = TaxConfig {
            cgst_percent: 9.0,
            sgst_percent: 9.0,
            igst_percent: 18.0,
            gst_on_total: false,
            ..TaxConfig::default()
        };
        assert_eq!(TaxService::compute_tax(0.0, &[], &config), 0.0);
    }

    #[test]
    fn test_negative_margin_passes_through() {
        let items = vec![priced_item(1000.0, -20.0, 1)];
        let config = TaxConfig {
            igst_percent: 18.0,
            gst_on_total: false,
            ..TaxConfig::default()
        };
        // margin = 800 − 1000 = −200; tax goes negative rather than clamping
        assert_eq!(TaxService::compute_tax(800.0, &items, &config), -36.0);
    }
}
