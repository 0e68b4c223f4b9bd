use serde::{Deserialize, Serialize};

/// Tax rates applied to a trip's aggregate totals. The three GST components
/// follow the `gst_on_total` toggle (full subtotal vs. margin only); TCS is
/// always charged on the full subtotal.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TaxConfig {
    pub cgst_percent: f64,
    pub sgst_percent: f64,
    pub igst_percent: f64,
    pub tcs_percent: f64,
    pub gst_on_total: bool,
}

impl TaxConfig {
    pub fn gst_rate(&self) -> f64 {
        self.cgst_percent + self.sgst_percent + self.igst_percent
    }
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            cgst_percent: 0.0,
            sgst_percent: 0.0,
            igst_percent: 0.0,
            tcs_percent: 0.0,
            gst_on_total: true,
        }
    }
}
