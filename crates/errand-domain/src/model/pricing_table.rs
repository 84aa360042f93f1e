//! Pricing constants for errand quotes
//!
//! All amounts are KRW. `PricingTable::default()` carries the production
//! rates; a TOML file may override any subset of them (see
//! `errand_infra::pricing_table_loader`).

use serde::{Deserialize, Serialize};

use errand_types::{ShoppingRange, TimeCondition, ValidationError, WeatherCondition, WeightClass};

/// Multipliers applied to the base + distance subtotal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherMultipliers {
    pub clear: f64,
    pub rain: f64,
    pub snow: f64,
    pub extreme: f64,
}

impl Default for WeatherMultipliers {
    fn default() -> Self {
        Self {
            clear: 1.0,
            rain: 1.2,
            snow: 1.4,
            extreme: 1.5,
        }
    }
}

/// Flat surcharges per time-of-day band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSurcharges {
    pub late_night: i64,
    pub rush_hour: i64,
}

impl Default for TimeSurcharges {
    fn default() -> Self {
        Self {
            late_night: 5000,
            rush_hour: 2000,
        }
    }
}

/// Flat surcharges per weight class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightSurcharges {
    pub medium: i64,
    pub heavy: i64,
}

impl Default for WeightSurcharges {
    fn default() -> Self {
        Self {
            medium: 2000,
            heavy: 10000,
        }
    }
}

/// Purchase-on-behalf fees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShoppingFees {
    pub base_price: i64,
    pub range_local: i64,
    pub range_district: i64,
    pub range_city: i64,
    /// Per item beyond `free_items`
    pub item_price: i64,
    pub free_items: u32,
}

impl Default for ShoppingFees {
    fn default() -> Self {
        Self {
            base_price: 5000,
            range_local: 0,
            range_district: 3000,
            range_city: 8000,
            item_price: 500,
            free_items: 2,
        }
    }
}

/// Complete rate card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingTable {
    pub base_price: i64,
    pub price_per_km: i64,
    /// Floor for every total; must be a multiple of 100
    pub min_price: i64,
    /// Per additional stop on a multi-stop delivery
    pub stop_fee: i64,
    /// Helper monthly subscription, display only
    pub subscription_fee: i64,
    /// Fraction of the server price a client quote may deviate by
    pub price_tolerance: f64,
    /// Straight-line to road distance ratio
    pub road_distance_factor: f64,
    pub average_speed_kmh: f64,
    pub weather: WeatherMultipliers,
    pub time: TimeSurcharges,
    pub weight: WeightSurcharges,
    pub shopping: ShoppingFees,
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            base_price: 3000,
            price_per_km: 1200,
            min_price: 3000,
            stop_fee: 1500,
            subscription_fee: 30000,
            price_tolerance: 0.1,
            road_distance_factor: 1.4,
            average_speed_kmh: 30.0,
            weather: WeatherMultipliers::default(),
            time: TimeSurcharges::default(),
            weight: WeightSurcharges::default(),
            shopping: ShoppingFees::default(),
        }
    }
}

impl PricingTable {
    pub fn weather_multiplier(&self, weather: WeatherCondition) -> f64 {
        match weather {
            WeatherCondition::Clear => self.weather.clear,
            WeatherCondition::Rain => self.weather.rain,
            WeatherCondition::Snow => self.weather.snow,
            WeatherCondition::Extreme => self.weather.extreme,
        }
    }

    pub fn time_surcharge(&self, time: TimeCondition) -> i64 {
        match time {
            TimeCondition::Day => 0,
            TimeCondition::LateNight => self.time.late_night,
            TimeCondition::RushHour => self.time.rush_hour,
        }
    }

    pub fn weight_surcharge(&self, weight: WeightClass) -> i64 {
        match weight {
            WeightClass::Light => 0,
            WeightClass::Medium => self.weight.medium,
            WeightClass::Heavy => self.weight.heavy,
        }
    }

    /// Fixed range fee, `None` for `Specific` (priced by distance)
    pub fn shopping_range_fee(&self, range: ShoppingRange) -> Option<i64> {
        match range {
            ShoppingRange::Local => Some(self.shopping.range_local),
            ShoppingRange::District => Some(self.shopping.range_district),
            ShoppingRange::City => Some(self.shopping.range_city),
            ShoppingRange::Specific => None,
        }
    }

    /// Check the invariants the calculators rely on
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fees = [
            ("base_price", self.base_price),
            ("price_per_km", self.price_per_km),
            ("min_price", self.min_price),
            ("stop_fee", self.stop_fee),
            ("subscription_fee", self.subscription_fee),
            ("time.late_night", self.time.late_night),
            ("time.rush_hour", self.time.rush_hour),
            ("weight.medium", self.weight.medium),
            ("weight.heavy", self.weight.heavy),
            ("shopping.base_price", self.shopping.base_price),
            ("shopping.range_local", self.shopping.range_local),
            ("shopping.range_district", self.shopping.range_district),
            ("shopping.range_city", self.shopping.range_city),
            ("shopping.item_price", self.shopping.item_price),
        ];
        for (name, value) in fees {
            if value < 0 {
                return Err(invalid(format!("{} must not be negative ({})", name, value)));
            }
        }

        if self.min_price % 100 != 0 {
            return Err(invalid(format!(
                "min_price must be a multiple of 100 ({})",
                self.min_price
            )));
        }

        let multipliers = [
            ("weather.clear", self.weather.clear),
            ("weather.rain", self.weather.rain),
            ("weather.snow", self.weather.snow),
            ("weather.extreme", self.weather.extreme),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value < 1.0 {
                return Err(invalid(format!("{} must be >= 1.0 ({})", name, value)));
            }
        }

        if !(0.0..=1.0).contains(&self.price_tolerance) {
            return Err(invalid(format!(
                "price_tolerance must be within 0..=1 ({})",
                self.price_tolerance
            )));
        }
        if !self.road_distance_factor.is_finite() || self.road_distance_factor < 1.0 {
            return Err(invalid(format!(
                "road_distance_factor must be >= 1.0 ({})",
                self.road_distance_factor
            )));
        }
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(invalid(format!(
                "average_speed_kmh must be positive ({})",
                self.average_speed_kmh
            )));
        }

        Ok(())
    }
}

fn invalid(message: String) -> ValidationError {
    ValidationError::InvalidPricingTable(message)
}
