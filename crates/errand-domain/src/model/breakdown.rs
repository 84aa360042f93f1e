//! Pricing results

use serde::{Deserialize, Serialize};

/// Itemized single-leg delivery quote (KRW)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base_price: i64,
    pub distance_price: i64,
    pub weather_surcharge: i64,
    pub time_surcharge: i64,
    pub weight_surcharge: i64,
    /// Rounded to the nearest 100
    pub total_price: i64,
}

impl PriceBreakdown {
    /// Sum of the five components before rounding
    pub fn component_sum(&self) -> i64 {
        [
            self.distance_price,
            self.weather_surcharge,
            self.time_surcharge,
            self.weight_surcharge,
        ]
        .iter()
        .fold(self.base_price, |sum, part| sum.saturating_add(*part))
    }
}

/// Multi-stop delivery quote (KRW)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiStopPriceBreakdown {
    pub base_price: i64,
    pub distance_price: i64,
    pub weather_surcharge: i64,
    pub time_surcharge: i64,
    pub weight_surcharge: i64,
    pub stop_fee: i64,
    pub total_stops: u32,
    pub total_price: i64,
}

impl MultiStopPriceBreakdown {
    /// View as a plain breakdown; `total_price` keeps the stop fee
    pub fn as_price_breakdown(&self) -> PriceBreakdown {
        PriceBreakdown {
            base_price: self.base_price,
            distance_price: self.distance_price,
            weather_surcharge: self.weather_surcharge,
            time_surcharge: self.time_surcharge,
            weight_surcharge: self.weight_surcharge,
            total_price: self.total_price,
        }
    }
}

/// Purchase-on-behalf quote (KRW)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingPriceBreakdown {
    pub base_price: i64,
    pub range_fee: i64,
    pub item_fee: i64,
    pub weather_surcharge: i64,
    pub time_surcharge: i64,
    pub heavy_item_surcharge: i64,
    pub total_price: i64,
}

impl ShoppingPriceBreakdown {
    pub fn component_sum(&self) -> i64 {
        [
            self.range_fee,
            self.item_fee,
            self.weather_surcharge,
            self.time_surcharge,
            self.heavy_item_surcharge,
        ]
        .iter()
        .fold(self.base_price, |sum, part| sum.saturating_add(*part))
    }
}

/// Estimated road leg between two points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    pub straight_km: f64,
    /// One decimal
    pub distance_km: f64,
    pub duration_min: u32,
}

/// Outcome of reconciling a client-computed price with the server quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceVerification {
    pub client_price: i64,
    pub server_price: i64,
    pub accepted_price: i64,
    pub tip: i64,
    pub final_price: i64,
    pub within_tolerance: bool,
}
