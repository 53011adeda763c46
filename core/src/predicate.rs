//! Filter predicate engine.
//!
//! One record against one configuration plus a free-text search term. Every
//! clause must hold; a clause at its neutral value is vacuously true. Cheap
//! clauses (selectors, flags, ranges) run before the substring and date
//! clauses.
//!
//! Case handling mirrors the dashboard as shipped: name/email/plan match
//! case-insensitively, router/IP case-sensitively, phone literally. Flagged
//! with the product owner; do not "fix" one side without the other.

use crate::customer::{CustomerRecord, CustomerStatus};
use crate::filter::FilterConfiguration;
use chrono::{DateTime, NaiveDate, Utc};

/// Evaluate `record` against `config` and `search_term`.
pub fn matches(record: &CustomerRecord, config: &FilterConfiguration, search_term: &str) -> bool {
    let view = record.normalized();

    // Selector clauses
    if !config.status.selects(&record.status) {
        return false;
    }
    if !config.customer_type.selects(&record.customer_type) {
        return false;
    }
    if !config.payment_method.selects(&record.payment_method) {
        return false;
    }

    // Flag clauses
    if config.has_overdue_balance && view.balance >= 0 {
        return false;
    }
    if config.has_active_service
        && !(record.status == CustomerStatus::Active && !view.plan.is_empty())
    {
        return false;
    }

    // Range clauses (inverted ranges select nothing, by NumericRange contract)
    if !config.balance.contains(view.balance) {
        return false;
    }
    if !config.monthly_fee.contains(view.monthly_fee) {
        return false;
    }
    if !config.connection_quality.contains(view.connection_quality) {
        return false;
    }

    // Substring clauses
    if !search_clause(record, search_term) {
        return false;
    }
    if !contains_ci(view.plan, &config.plan) {
        return false;
    }
    if !config.router.is_empty() && !view.router.contains(&config.router) {
        return false;
    }
    if !config.ip.is_empty() && !view.ip.contains(&config.ip) {
        return false;
    }

    // Date clauses
    if !within_bounds(
        Some(record.created_at),
        config.created_from,
        config.created_to,
    ) {
        return false;
    }
    if !within_bounds(
        view.last_payment_date,
        config.last_payment_from,
        config.last_payment_to,
    ) {
        return false;
    }

    true
}

/// Free-text search over name, email (case-insensitive) and phone (literal —
/// phone numbers have no case).
fn search_clause(record: &CustomerRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    contains_ci(&record.name, term)
        || contains_ci(&record.email, term)
        || record.phone.contains(term)
}

/// Case-insensitive substring test. An empty needle matches anything.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Inclusive date-bound check over an optional timestamp. A record with no
/// timestamp fails any bound that is set — "last payment after X" must
/// exclude customers who never paid.
fn within_bounds(
    value: Option<DateTime<Utc>>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let Some(ts) = value else {
        return false;
    };
    let date = ts.date_naive();
    if let Some(lo) = from {
        if date < lo {
            return false;
        }
    }
    if let Some(hi) = to {
        if date > hi {
            return false;
        }
    }
    true
}
