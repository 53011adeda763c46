//! Display classification — badge tiers for status, balance and connection
//! quality. Pure lookup tables; the presentation layer maps tiers to colors.

use crate::customer::CustomerStatus;
use crate::types::Money;
use serde::{Deserialize, Serialize};

/// Display category for a badge. The UI owns the actual palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Success,
    Warning,
    Danger,
    Muted,
}

pub fn status_badge(status: CustomerStatus) -> BadgeTier {
    match status {
        CustomerStatus::Active => BadgeTier::Success,
        CustomerStatus::Suspended => BadgeTier::Warning,
        CustomerStatus::Inactive => BadgeTier::Muted,
    }
}

/// Negative balance means the customer owes money.
pub fn balance_badge(balance: Money) -> BadgeTier {
    if balance < 0 {
        BadgeTier::Danger
    } else if balance == 0 {
        BadgeTier::Muted
    } else {
        BadgeTier::Success
    }
}

pub const QUALITY_EXCELLENT_MIN: i64 = 80;
pub const QUALITY_GOOD_MIN: i64 = 60;
pub const QUALITY_FAIR_MIN: i64 = 40;

/// Connection-quality band for a 0–100 score. An absent score reads as 0
/// (Poor) after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityTier {
    pub fn from_score(score: i64) -> Self {
        if score >= QUALITY_EXCELLENT_MIN {
            Self::Excellent
        } else if score >= QUALITY_GOOD_MIN {
            Self::Good
        } else if score >= QUALITY_FAIR_MIN {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn badge(self) -> BadgeTier {
        match self {
            Self::Excellent | Self::Good => BadgeTier::Success,
            Self::Fair => BadgeTier::Warning,
            Self::Poor => BadgeTier::Danger,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}
