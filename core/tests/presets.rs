use chrono::NaiveDate;
use netdesk_core::{
    aggregator, CrmError, CustomerStatus, FilterConfiguration, FilterPatch, FilterPreset,
    NumericRange, PresetLibrary, Select,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn status_preset(name: &str, status: CustomerStatus) -> FilterPreset {
    FilterPreset::new(
        name,
        FilterPatch {
            status: Some(Select::Only(status)),
            ..Default::default()
        },
    )
}

// ── Merge semantics ──────────────────────────────────────────────────────────

/// Applying a preset overrides exactly the keys it carries; every other
/// field of the current configuration is untouched.
#[test]
fn preset_only_overrides_present_keys() {
    let mut current = FilterConfiguration::neutral();
    current.plan = "business".into();
    current.balance = NumericRange::new(-9_000_00, 0);
    current.has_active_service = true;

    let merged = aggregator::apply_preset(&current, &status_preset("x", CustomerStatus::Active));

    assert_eq!(merged.status, Select::Only(CustomerStatus::Active));
    assert_eq!(merged.plan, current.plan);
    assert_eq!(merged.balance, current.balance);
    assert_eq!(merged.has_active_service, current.has_active_service);
    assert_eq!(merged.customer_type, current.customer_type);
}

/// Merge is keyed overwrite, so applying the same preset twice equals
/// applying it once.
#[test]
fn preset_application_is_idempotent() {
    let mut current = FilterConfiguration::neutral();
    current.router = "MT-".into();

    let preset = status_preset("suspended", CustomerStatus::Suspended);
    let once = aggregator::apply_preset(&current, &preset);
    let twice = aggregator::apply_preset(&once, &preset);
    assert_eq!(once, twice);
}

/// A preset can reset a clause to its neutral value (e.g. status back to all).
#[test]
fn preset_can_carry_neutral_values() {
    let mut current = FilterConfiguration::neutral();
    current.status = Select::Only(CustomerStatus::Inactive);

    let preset = FilterPreset::new(
        "any-status",
        FilterPatch {
            status: Some(Select::All),
            ..Default::default()
        },
    );
    let merged = aggregator::apply_preset(&current, &preset);
    assert!(merged.status.is_all());
}

#[test]
fn empty_patch_changes_nothing() {
    let mut current = FilterConfiguration::neutral();
    current.ip = "10.0.".into();
    current.has_overdue_balance = true;

    let preset = FilterPreset::new("noop", FilterPatch::default());
    assert!(preset.filters.is_empty());
    assert_eq!(aggregator::apply_preset(&current, &preset), current);
}

// ── Capture ──────────────────────────────────────────────────────────────────

/// Capturing a configuration and applying the result onto a neutral one
/// round-trips the configuration.
#[test]
fn capture_then_apply_round_trips() {
    let mut cfg = FilterConfiguration::neutral();
    cfg.status = Select::Only(CustomerStatus::Active);
    cfg.plan = "home".into();
    cfg.connection_quality = NumericRange::new(40, 100);
    cfg.last_payment_from = Some(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    cfg.has_overdue_balance = true;

    let preset = FilterPreset::capture("my-view", &cfg);
    let restored = aggregator::apply_preset(&aggregator::clear(), &preset);
    assert_eq!(restored, cfg);
}

#[test]
fn capture_of_neutral_config_is_empty() {
    let preset = FilterPreset::capture("blank", &FilterConfiguration::neutral());
    assert!(preset.filters.is_empty());
}

// ── Preset library ───────────────────────────────────────────────────────────

#[test]
fn save_get_remove() {
    let mut library = PresetLibrary::new();
    assert!(library.is_empty());

    library.save(status_preset("active-only", CustomerStatus::Active));
    library.save(status_preset("suspended-only", CustomerStatus::Suspended));
    assert_eq!(library.len(), 2);
    assert!(library.get("active-only").is_some());

    assert!(library.remove("active-only"));
    assert!(!library.remove("active-only"), "second remove finds nothing");
    assert_eq!(library.len(), 1);
}

#[test]
fn saving_under_an_existing_name_replaces() {
    let mut library = PresetLibrary::new();
    library.save(status_preset("view", CustomerStatus::Active));
    library.save(status_preset("view", CustomerStatus::Inactive));

    assert_eq!(library.len(), 1);
    let stored = library.get("view").unwrap();
    assert_eq!(
        stored.filters.status,
        Some(Select::Only(CustomerStatus::Inactive))
    );
}

#[test]
fn apply_unknown_preset_errors() {
    let library = PresetLibrary::new();
    let err = library
        .apply("nope", &FilterConfiguration::neutral())
        .unwrap_err();
    assert!(matches!(err, CrmError::PresetNotFound { name } if name == "nope"));
}

#[test]
fn library_json_round_trip() {
    let mut library = PresetLibrary::new();
    library.save(status_preset("active-only", CustomerStatus::Active));
    library.save(FilterPreset::new(
        "overdue",
        FilterPatch {
            has_overdue_balance: Some(true),
            balance: Some(NumericRange::new(i64::MIN, -1)),
            ..Default::default()
        },
    ));

    let json = library.to_json().unwrap();
    let restored = PresetLibrary::from_json(&json).unwrap();
    assert_eq!(restored, library);
}
