//! Filter aggregator — drives the predicate over a full snapshot.
//!
//! Pure front door for the customer list page: filter a snapshot, count the
//! active clauses for the badge, merge presets, reset to neutral. Never
//! mutates its inputs.

use crate::customer::CustomerRecord;
use crate::filter::{FilterConfiguration, FilterPreset};
use crate::predicate::matches;

/// Filter `records` down to the sub-sequence matching `config` and
/// `search_term`. Relative order of survivors is preserved.
pub fn apply(
    records: &[CustomerRecord],
    config: &FilterConfiguration,
    search_term: &str,
) -> Vec<CustomerRecord> {
    let survivors: Vec<CustomerRecord> = records
        .iter()
        .filter(|r| matches(r, config, search_term))
        .cloned()
        .collect();

    log::debug!(
        "filter: {}/{} records match ({} active clauses, search={:?})",
        survivors.len(),
        records.len(),
        config.active_clause_count(),
        search_term
    );

    survivors
}

/// Number of configuration fields deviating from neutral. Recompute on every
/// config change; never cache across edits.
pub fn active_clause_count(config: &FilterConfiguration) -> usize {
    config.active_clause_count()
}

/// Merge `preset` onto `current`: keys present in the preset override, all
/// others are untouched. Idempotent.
pub fn apply_preset(current: &FilterConfiguration, preset: &FilterPreset) -> FilterConfiguration {
    preset.filters.apply_to(current)
}

/// A fresh neutral configuration — the "clear filters" action.
pub fn clear() -> FilterConfiguration {
    FilterConfiguration::neutral()
}
