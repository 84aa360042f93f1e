//! Closed enums for errand pricing inputs
//!
//! Wire tokens are `SCREAMING_SNAKE_CASE` (`"LATE_NIGHT"`), CLI values are
//! clap's kebab-case (`late-night`). `FromStr` accepts either spelling.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ValidationError;

/// Normalize a user-supplied token to the wire spelling
fn normalize_token(s: &str) -> String {
    s.trim().replace('-', "_").to_ascii_uppercase()
}

/// Weather at the pickup point
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherCondition {
    #[default]
    Clear,
    Rain,
    Snow,
    /// Typhoon, heavy snowfall, heat/cold warnings
    Extreme,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::Rain,
        WeatherCondition::Snow,
        WeatherCondition::Extreme,
    ];

    /// Get display label in Korean
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "맑음",
            WeatherCondition::Rain => "비",
            WeatherCondition::Snow => "눈",
            WeatherCondition::Extreme => "악천후",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "CLEAR",
            WeatherCondition::Rain => "RAIN",
            WeatherCondition::Snow => "SNOW",
            WeatherCondition::Extreme => "EXTREME",
        }
    }
}

/// Time-of-day band used for surcharges
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeCondition {
    #[default]
    Day,
    /// 22:00 - 05:59
    LateNight,
    /// 07:00 - 08:59, 18:00 - 19:59
    RushHour,
}

impl TimeCondition {
    pub const ALL: [TimeCondition; 3] = [
        TimeCondition::Day,
        TimeCondition::LateNight,
        TimeCondition::RushHour,
    ];

    /// Get display label in Korean
    pub fn label(&self) -> &'static str {
        match self {
            TimeCondition::Day => "주간",
            TimeCondition::LateNight => "심야",
            TimeCondition::RushHour => "출퇴근",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeCondition::Day => "DAY",
            TimeCondition::LateNight => "LATE_NIGHT",
            TimeCondition::RushHour => "RUSH_HOUR",
        }
    }
}

/// Handling weight class of the goods
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightClass {
    #[default]
    Light,
    Medium,
    Heavy,
}

impl WeightClass {
    pub const ALL: [WeightClass; 3] = [WeightClass::Light, WeightClass::Medium, WeightClass::Heavy];

    /// Get display label in Korean
    pub fn label(&self) -> &'static str {
        match self {
            WeightClass::Light => "가벼움",
            WeightClass::Medium => "보통",
            WeightClass::Heavy => "무거움",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightClass::Light => "LIGHT",
            WeightClass::Medium => "MEDIUM",
            WeightClass::Heavy => "HEAVY",
        }
    }
}

/// Search radius for purchase-on-behalf errands
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShoppingRange {
    /// Within 1km
    #[default]
    Local,
    /// Within 3km
    District,
    /// Within 10km
    City,
    /// A named store, priced by distance
    Specific,
}

impl ShoppingRange {
    pub const ALL: [ShoppingRange; 4] = [
        ShoppingRange::Local,
        ShoppingRange::District,
        ShoppingRange::City,
        ShoppingRange::Specific,
    ];

    /// Get display label in Korean
    pub fn label(&self) -> &'static str {
        match self {
            ShoppingRange::Local => "🏠 동네 (1km 이내)",
            ShoppingRange::District => "🏪 우리동네 (3km 이내)",
            ShoppingRange::City => "🏙️ 넓은 범위 (10km 이내)",
            ShoppingRange::Specific => "📍 특정 장소 지정",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShoppingRange::Local => "LOCAL",
            ShoppingRange::District => "DISTRICT",
            ShoppingRange::City => "CITY",
            ShoppingRange::Specific => "SPECIFIC",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for TimeCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for ShoppingRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "CLEAR" => Ok(WeatherCondition::Clear),
            "RAIN" => Ok(WeatherCondition::Rain),
            "SNOW" => Ok(WeatherCondition::Snow),
            "EXTREME" => Ok(WeatherCondition::Extreme),
            _ => Err(ValidationError::UnknownValue {
                kind: "weather condition",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for TimeCondition {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "DAY" => Ok(TimeCondition::Day),
            "LATE_NIGHT" => Ok(TimeCondition::LateNight),
            "RUSH_HOUR" => Ok(TimeCondition::RushHour),
            _ => Err(ValidationError::UnknownValue {
                kind: "time condition",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for WeightClass {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "LIGHT" => Ok(WeightClass::Light),
            "MEDIUM" => Ok(WeightClass::Medium),
            "HEAVY" => Ok(WeightClass::Heavy),
            _ => Err(ValidationError::UnknownValue {
                kind: "weight class",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for ShoppingRange {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "LOCAL" => Ok(ShoppingRange::Local),
            "DISTRICT" => Ok(ShoppingRange::District),
            "CITY" => Ok(ShoppingRange::City),
            "SPECIFIC" => Ok(ShoppingRange::Specific),
            _ => Err(ValidationError::UnknownValue {
                kind: "shopping range",
                value: s.to_string(),
            }),
        }
    }
}
