//! Pro-rated service-duration arithmetic.
//!
//! A partial payment buys a proportional slice of a 30-day month. "Now" is
//! always an injected parameter; nothing here reads a clock.

use crate::types::Money;
use chrono::{Duration, NaiveDate};

/// Fixed proration basis: one month is 30 days, regardless of calendar month.
pub const PRORATION_BASIS_DAYS: i64 = 30;

/// Days of service a payment buys against a monthly fee.
///
/// `floor(payment / fee * 30)`. A zero (or negative) fee has no proration
/// basis and yields 0 days — guarded, never a division by zero.
pub fn activation_days(payment: Money, monthly_fee: Money) -> i64 {
    if monthly_fee <= 0 {
        return 0;
    }
    let ratio = payment as f64 / monthly_fee as f64;
    (ratio * PRORATION_BASIS_DAYS as f64).floor() as i64
}

/// Expiry date after applying a payment: `from` plus the activation days,
/// as calendar-day addition (no elapsed-seconds math, no DST artifacts).
pub fn expiry_date(payment: Money, monthly_fee: Money, from: NaiveDate) -> NaiveDate {
    from + Duration::days(activation_days(payment, monthly_fee))
}
