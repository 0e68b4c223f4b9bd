use crate::models::currency::Currency;
use crate::services::pricing_service::round2;

pub struct CurrencyService;

impl CurrencyService {
    /// Convert a stored base-currency amount for display. Aggregates are
    /// always computed in base currency first and converted exactly once;
    /// converting already-converted values compounds rounding error.
    pub fn to_display(amount_base: f64, currency: Currency) -> f64 {
        round2(amount_base * currency.rate())
    }

    /// Convert a display amount back to base currency.
    pub fn to_base(amount_display: f64, currency: Currency) -> f64 {
        round2(amount_display / currency.rate())
    }

    /// Format a base-currency amount in the given display currency:
    /// symbol, grouped digits, two fraction digits. INR uses en-IN
    /// grouping (12,34,567.89), everything else groups by thousands.
    pub fn format(amount_base: f64, currency: Currency) -> String {
        let display = Self::to_display(amount_base, currency);
        let negative = display < 0.0;
        let cents = (display.abs() * 100.0).round() as u64;
        let whole = cents / 100;
        let frac = cents % 100;

        let grouped = match currency {
            Currency::Inr => group_indian(whole),
            _ => group_thousands(whole),
        };

        let sign = if negative { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, currency.symbol(), grouped, frac)
    }

    /// Parse a string produced by `format` back to a base-currency amount.
    /// Returns `None` for anything that does not look like a number.
    pub fn parse(formatted: &str, currency: Currency) -> Option<f64> {
        let cleaned: String = formatted
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
            .collect();
        let display = cleaned.parse::<f64>().ok()?;
        Some(Self::to_base(display, currency))
    }
}

fn group_thousands(mut whole: u64) -> String {
    if whole == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while whole > 0 {
        groups.push(format!("{:03}", whole % 1000));
        whole /= 1000;
    }
    let mut out = groups.pop().unwrap_or_default();
    out = out.trim_start_matches('0').to_string();
    if out.is_empty() {
        out = "0".to_string();
    }
    for group in groups.iter().rev() {
        out.push(',');
        out.push_str(group);
    }
    out
}

/// en-IN grouping: last three digits, then groups of two.
fn group_indian(whole: u64) -> String {
    let digits = whole.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts = Vec::new();
    let head_bytes = head.as_bytes();
    let mut idx = head_bytes.len();
    while idx > 0 {
        let start = idx.saturating_sub(2);
        parts.push(&head[start..idx]);
        idx = start;
    }
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}
