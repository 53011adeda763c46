//! netdesk-core — filtering and derivation engine for the NetDesk ISP
//! customer dashboard.
//!
//! The crate is the pure core behind the customer list and detail pages:
//! evaluate a snapshot of customer records against a composite filter
//! configuration, merge named presets, compute pro-rated activation days,
//! and classify values for display. It performs no I/O, reads no clock, and
//! holds no mutable state; the presentation and persistence layers live
//! elsewhere and call in with plain values.

pub mod aggregator;
pub mod classifier;
pub mod currency;
pub mod customer;
pub mod error;
pub mod filter;
pub mod predicate;
pub mod proration;
pub mod rng;
pub mod sample_data;
pub mod types;

pub use aggregator::{active_clause_count, apply, apply_preset, clear};
pub use classifier::{balance_badge, status_badge, BadgeTier, QualityTier};
pub use currency::CurrencyFormatter;
pub use customer::{CustomerRecord, CustomerStatus, CustomerType, PaymentMethod};
pub use error::{CrmError, CrmResult};
pub use filter::{
    FilterConfiguration, FilterPatch, FilterPreset, NumericRange, PresetLibrary, Select,
};
pub use predicate::matches;
pub use proration::{activation_days, expiry_date, PRORATION_BASIS_DAYS};
