//! Currency rendering for dashboard display.
//!
//! Monetary amounts live in minor units everywhere in the core; only at the
//! display edge do they become strings. Locale configuration (currency code,
//! decimal places) is fixed at construction, not per call.

use crate::types::Money;

#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    code: String,
    decimal_places: u32,
}

impl CurrencyFormatter {
    /// Formatter with the conventional two decimal places.
    pub fn new(code: impl Into<String>) -> Self {
        Self::with_decimal_places(code, 2)
    }

    /// Formatter for currencies with a non-standard minor unit (0 for
    /// zero-decimal currencies).
    pub fn with_decimal_places(code: impl Into<String>, decimal_places: u32) -> Self {
        Self {
            code: code.into(),
            decimal_places,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Render a minor-unit amount, e.g. `KES 2,500.00`. Total for any input;
    /// negative amounts carry a leading minus on the number.
    pub fn format(&self, amount_minor: Money) -> String {
        let scale: i64 = 10i64.pow(self.decimal_places);
        let negative = amount_minor < 0;
        let abs = amount_minor.unsigned_abs();
        let major = abs / scale.unsigned_abs();
        let minor = abs % scale.unsigned_abs();

        let grouped = group_thousands(major);
        let sign = if negative { "-" } else { "" };

        if self.decimal_places == 0 {
            format!("{} {}{}", self.code, sign, grouped)
        } else {
            format!(
                "{} {}{}.{:0width$}",
                self.code,
                sign,
                grouped,
                minor,
                width = self.decimal_places as usize
            )
        }
    }
}

/// Comma-group a non-negative integer: 1234567 -> "1,234,567".
fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push_str(&format!(",{g:03}"));
    }
    out
}
