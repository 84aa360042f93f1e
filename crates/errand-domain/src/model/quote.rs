//! Quote records kept in history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::breakdown::{
    MultiStopPriceBreakdown, PriceBreakdown, PriceVerification, ShoppingPriceBreakdown,
};
use super::factors::{MultiStopFactors, PriceFactors, ShoppingFactors};

/// A computed quote together with the inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Quote {
    Errand {
        factors: PriceFactors,
        breakdown: PriceBreakdown,
    },
    MultiStop {
        factors: MultiStopFactors,
        breakdown: MultiStopPriceBreakdown,
    },
    Shopping {
        factors: ShoppingFactors,
        breakdown: ShoppingPriceBreakdown,
    },
}

impl Quote {
    pub fn total_price(&self) -> i64 {
        match self {
            Quote::Errand { breakdown, .. } => breakdown.total_price,
            Quote::MultiStop { breakdown, .. } => breakdown.total_price,
            Quote::Shopping { breakdown, .. } => breakdown.total_price,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Quote::Errand { .. } => "errand",
            Quote::MultiStop { .. } => "multi_stop",
            Quote::Shopping { .. } => "shopping",
        }
    }

    /// Serialized inputs only, used as the fingerprint source
    pub fn factors_json(&self) -> serde_json::Result<String> {
        match self {
            Quote::Errand { factors, .. } => serde_json::to_string(factors),
            Quote::MultiStop { factors, .. } => serde_json::to_string(factors),
            Quote::Shopping { factors, .. } => serde_json::to_string(factors),
        }
    }
}

/// Persisted quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: String,
    /// SHA-256 of kind + factors
    pub fingerprint: String,
    pub quote: Quote,
    #[serde(default)]
    pub verification: Option<PriceVerification>,
    #[serde(default)]
    pub label: Option<String>,
    pub quoted_at: DateTime<Utc>,
}

impl QuoteRecord {
    /// Price the customer pays, tip included when verified
    pub fn final_price(&self) -> i64 {
        self.verification
            .map(|v| v.final_price)
            .unwrap_or_else(|| self.quote.total_price())
    }
}
