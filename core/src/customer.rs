//! Customer record model.
//!
//! Records arrive as JSON snapshots from the persistence layer; several
//! fields are optional on the wire. All defaulting lives in one place —
//! [`CustomerRecord::normalized`] — so the predicate never has to reason
//! about absent values clause by clause.

use crate::types::{CustomerId, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Suspended,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    Individual,
    Company,
    School,
}

/// Payment channels are open-ended on the wire; anything unrecognized
/// deserializes as `Other` rather than failing the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    Mpesa,
    Bank,
    Cash,
    Card,
    Other,
}

impl From<String> for PaymentMethod {
    fn from(value: String) -> Self {
        match value.as_str() {
            "mpesa" => Self::Mpesa,
            "bank" => Self::Bank,
            "cash" => Self::Cash,
            "card" => Self::Card,
            _ => Self::Other,
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::Mpesa => "mpesa",
            PaymentMethod::Bank => "bank",
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Other => "other",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: CustomerStatus,
    pub customer_type: CustomerType,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub balance: Option<Money>,
    #[serde(default)]
    pub monthly_fee: Option<Money>,
    #[serde(default)]
    pub connection_quality: Option<i64>, // 0..=100 when present
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_payment_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub router_allocated: Option<String>,
    #[serde(default)]
    pub ip_allocated: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
}

/// Borrowed view of a record with every optional field resolved to its
/// documented default: numerics to 0, strings to "".
#[derive(Debug, Clone, Copy)]
pub struct NormalizedCustomer<'a> {
    pub balance: Money,
    pub monthly_fee: Money,
    pub connection_quality: i64,
    pub plan: &'a str,
    pub router: &'a str,
    pub ip: &'a str,
    pub last_payment_date: Option<DateTime<Utc>>,
}

impl CustomerRecord {
    pub fn normalized(&self) -> NormalizedCustomer<'_> {
        NormalizedCustomer {
            balance: self.balance.unwrap_or(0),
            monthly_fee: self.monthly_fee.unwrap_or(0),
            connection_quality: self.connection_quality.unwrap_or(0),
            plan: self.plan.as_deref().unwrap_or(""),
            router: self.router_allocated.as_deref().unwrap_or(""),
            ip: self.ip_allocated.as_deref().unwrap_or(""),
            last_payment_date: self.last_payment_date,
        }
    }

    /// Overdue means the customer owes money: balance strictly below zero.
    pub fn is_overdue(&self) -> bool {
        self.normalized().balance < 0
    }

    /// A customer has active service when their status is active and a
    /// service plan is assigned.
    pub fn has_active_service(&self) -> bool {
        self.status == CustomerStatus::Active && !self.normalized().plan.is_empty()
    }
}
