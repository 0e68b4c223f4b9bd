use serde::{Deserialize, Serialize};

/// Display currencies supported by the pricing screens. All stored amounts
/// are in the base currency (INR); every other currency is a display-time
/// conversion and never written back.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "AED")]
    Aed,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Inr,
        Currency::Usd,
        Currency::Aed,
        Currency::Eur,
        Currency::Gbp,
    ];

    pub const BASE: Currency = Currency::Inr;

    /// Static conversion rate from one base-currency unit.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Inr => 1.0,
            Currency::Usd => 0.012,
            Currency::Aed => 0.044,
            Currency::Eur => 0.011,
            Currency::Gbp => 0.0095,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Aed => "د.إ",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Aed => "AED",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::BASE
    }
}
