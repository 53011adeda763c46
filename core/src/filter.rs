//! Filter configuration — the value object one evaluation pass runs against.
//!
//! A configuration is immutable within a pass; the UI owns the mutable copy
//! and hands the core a fresh value on every change. Presets are partial
//! overlays: a named patch that overrides only the keys it carries.

use crate::customer::{CustomerStatus, CustomerType, PaymentMethod};
use crate::error::{CrmError, CrmResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All-or-one selector for enum-valued clauses. `All` is the neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Select<T> {
    All,
    Only(T),
}

impl<T> Default for Select<T> {
    fn default() -> Self {
        Select::All
    }
}

impl<T: PartialEq> Select<T> {
    pub fn selects(&self, value: &T) -> bool {
        match self {
            Select::All => true,
            Select::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Select::All)
    }
}

/// Inclusive numeric range. An inverted range (`min > max`) selects the
/// empty set rather than panicking — the predicate stays total even when a
/// caller hands us a malformed pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
}

impl NumericRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// The unrestricted range — the neutral value for range clauses.
    pub const fn full() -> Self {
        Self {
            min: i64::MIN,
            max: i64::MAX,
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    pub fn is_full(&self) -> bool {
        *self == Self::full()
    }
}

impl Default for NumericRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Composite filter state for the customer list. `Default` is the documented
/// neutral configuration: every clause vacuously true.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfiguration {
    pub status: Select<CustomerStatus>,
    pub customer_type: Select<CustomerType>,
    pub payment_method: Select<PaymentMethod>,

    /// Case-insensitive substring over the plan label. Empty = no constraint.
    pub plan: String,
    /// Case-sensitive substrings over the allocated router / IP fields.
    pub router: String,
    pub ip: String,

    pub balance: NumericRange,
    pub monthly_fee: NumericRange,
    pub connection_quality: NumericRange,

    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
    pub last_payment_from: Option<NaiveDate>,
    pub last_payment_to: Option<NaiveDate>,

    /// When set, require balance < 0.
    pub has_overdue_balance: bool,
    /// When set, require active status and a non-empty plan.
    pub has_active_service: bool,
}

impl FilterConfiguration {
    /// The neutral configuration. Equivalent to `Default::default()`; named
    /// for call sites that read better as an explicit reset.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Number of fields deviating from the neutral configuration. Drives the
    /// "N filters active" badge; each date bound counts on its own.
    pub fn active_clause_count(&self) -> usize {
        let mut n = 0;
        n += usize::from(!self.status.is_all());
        n += usize::from(!self.customer_type.is_all());
        n += usize::from(!self.payment_method.is_all());
        n += usize::from(!self.plan.is_empty());
        n += usize::from(!self.router.is_empty());
        n += usize::from(!self.ip.is_empty());
        n += usize::from(!self.balance.is_full());
        n += usize::from(!self.monthly_fee.is_full());
        n += usize::from(!self.connection_quality.is_full());
        n += usize::from(self.created_from.is_some());
        n += usize::from(self.created_to.is_some());
        n += usize::from(self.last_payment_from.is_some());
        n += usize::from(self.last_payment_to.is_some());
        n += usize::from(self.has_overdue_balance);
        n += usize::from(self.has_active_service);
        n
    }
}

/// Partial filter configuration: every field optional. Applying a patch
/// overrides exactly the keys present and leaves the rest untouched, so
/// application is idempotent (keyed overwrite, not additive).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPatch {
    pub status: Option<Select<CustomerStatus>>,
    pub customer_type: Option<Select<CustomerType>>,
    pub payment_method: Option<Select<PaymentMethod>>,
    pub plan: Option<String>,
    pub router: Option<String>,
    pub ip: Option<String>,
    pub balance: Option<NumericRange>,
    pub monthly_fee: Option<NumericRange>,
    pub connection_quality: Option<NumericRange>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
    pub last_payment_from: Option<NaiveDate>,
    pub last_payment_to: Option<NaiveDate>,
    pub has_overdue_balance: Option<bool>,
    pub has_active_service: Option<bool>,
}

impl FilterPatch {
    /// Shallow-merge this patch onto `current`, returning the merged value.
    pub fn apply_to(&self, current: &FilterConfiguration) -> FilterConfiguration {
        let mut merged = current.clone();
        if let Some(v) = self.status {
            merged.status = v;
        }
        if let Some(v) = self.customer_type {
            merged.customer_type = v;
        }
        if let Some(v) = self.payment_method {
            merged.payment_method = v;
        }
        if let Some(v) = &self.plan {
            merged.plan = v.clone();
        }
        if let Some(v) = &self.router {
            merged.router = v.clone();
        }
        if let Some(v) = &self.ip {
            merged.ip = v.clone();
        }
        if let Some(v) = self.balance {
            merged.balance = v;
        }
        if let Some(v) = self.monthly_fee {
            merged.monthly_fee = v;
        }
        if let Some(v) = self.connection_quality {
            merged.connection_quality = v;
        }
        if let Some(v) = self.created_from {
            merged.created_from = Some(v);
        }
        if let Some(v) = self.created_to {
            merged.created_to = Some(v);
        }
        if let Some(v) = self.last_payment_from {
            merged.last_payment_from = Some(v);
        }
        if let Some(v) = self.last_payment_to {
            merged.last_payment_to = Some(v);
        }
        if let Some(v) = self.has_overdue_balance {
            merged.has_overdue_balance = v;
        }
        if let Some(v) = self.has_active_service {
            merged.has_active_service = v;
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A named, partially-specified filter overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPreset {
    pub name: String,
    pub filters: FilterPatch,
}

impl FilterPreset {
    pub fn new(name: impl Into<String>, filters: FilterPatch) -> Self {
        Self {
            name: name.into(),
            filters,
        }
    }

    /// Snapshot the deviating fields of `config` into a named preset — the
    /// "save current filters" workflow. Fields at their neutral value are
    /// omitted so the preset stays a minimal overlay.
    pub fn capture(name: impl Into<String>, config: &FilterConfiguration) -> Self {
        let mut p = FilterPatch::default();
        if !config.status.is_all() {
            p.status = Some(config.status);
        }
        if !config.customer_type.is_all() {
            p.customer_type = Some(config.customer_type);
        }
        if !config.payment_method.is_all() {
            p.payment_method = Some(config.payment_method);
        }
        if !config.plan.is_empty() {
            p.plan = Some(config.plan.clone());
        }
        if !config.router.is_empty() {
            p.router = Some(config.router.clone());
        }
        if !config.ip.is_empty() {
            p.ip = Some(config.ip.clone());
        }
        if !config.balance.is_full() {
            p.balance = Some(config.balance);
        }
        if !config.monthly_fee.is_full() {
            p.monthly_fee = Some(config.monthly_fee);
        }
        if !config.connection_quality.is_full() {
            p.connection_quality = Some(config.connection_quality);
        }
        p.created_from = config.created_from;
        p.created_to = config.created_to;
        p.last_payment_from = config.last_payment_from;
        p.last_payment_to = config.last_payment_to;
        if config.has_overdue_balance {
            p.has_overdue_balance = Some(true);
        }
        if config.has_active_service {
            p.has_active_service = Some(true);
        }
        Self::new(name, p)
    }
}

/// Named preset collection. Order of insertion is preserved for display;
/// names are unique (saving under an existing name replaces it).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetLibrary {
    presets: Vec<FilterPreset>,
}

impl PresetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, preset: FilterPreset) {
        match self.presets.iter_mut().find(|p| p.name == preset.name) {
            Some(existing) => *existing = preset,
            None => self.presets.push(preset),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FilterPreset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Remove a preset by name. Returns true if one was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.presets.len();
        self.presets.retain(|p| p.name != name);
        self.presets.len() != before
    }

    /// Merge the named preset onto `current`.
    pub fn apply(&self, name: &str, current: &FilterConfiguration) -> CrmResult<FilterConfiguration> {
        let preset = self.get(name).ok_or_else(|| CrmError::PresetNotFound {
            name: name.to_string(),
        })?;
        Ok(preset.filters.apply_to(current))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterPreset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn to_json(&self) -> CrmResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> CrmResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
