pub struct PricingService;

impl PricingService {
    /// Sell price for one line: percentage markup, then flat markup, rounded
    /// to two decimals per unit, then scaled by quantity.
    ///
    /// The per-unit rounding happens before the quantity multiply. Reversing
    /// that order changes cumulative float error, and every stored
    /// `sell_price` in the system depends on this exact sequence.
    pub fn compute_sell_price(
        net_cost: f64,
        base_markup_percent: f64,
        extra_markup_flat: f64,
        quantity: u32,
    ) -> f64 {
        let unit = round2(net_cost * (1.0 + base_markup_percent / 100.0) + extra_markup_flat);
        unit * quantity as f64
    }

    /// Lenient parse for cost/markup inputs; anything non-numeric becomes 0.
    pub fn coerce_money(raw: &str) -> f64 {
        raw.trim().parse::<f64>().unwrap_or(0.0)
    }

    /// Lenient parse for quantity inputs; anything non-numeric or zero
    /// becomes 1.
    pub fn coerce_quantity(raw: &str) -> u32 {
        match raw.trim().parse::<u32>() {
            Ok(0) | Err(_) => 1,
            Ok(q) => q,
        }
    }
}

/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
