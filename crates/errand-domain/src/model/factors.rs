//! Pricing inputs

use serde::{Deserialize, Serialize};

use errand_types::{ShoppingRange, TimeCondition, ValidationError, WeatherCondition, WeightClass};

/// Longest billable leg, roughly half the Earth's circumference
pub const MAX_DISTANCE_KM: f64 = 20_000.0;

/// Inputs for a single-leg delivery quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceFactors {
    /// Road distance in km
    pub distance: f64,
    #[serde(default)]
    pub weather: WeatherCondition,
    #[serde(default)]
    pub time_of_day: TimeCondition,
    #[serde(default)]
    pub weight: WeightClass,
}

impl PriceFactors {
    /// Build factors, rejecting negative, non-finite or out-of-range distances
    pub fn try_new(
        distance: f64,
        weather: WeatherCondition,
        time_of_day: TimeCondition,
        weight: WeightClass,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            distance: validate_distance(distance)?,
            weather,
            time_of_day,
            weight,
        })
    }
}

/// Inputs for a delivery with intermediate drop-offs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiStopFactors {
    pub factors: PriceFactors,
    /// Pickup included, so a plain delivery has 1
    pub total_stops: u32,
}

/// Inputs for a purchase-on-behalf quote
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingFactors {
    pub range: ShoppingRange,
    pub item_count: u32,
    /// Store to drop-off distance, only used for `ShoppingRange::Specific`
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub weather: WeatherCondition,
    #[serde(default)]
    pub time_of_day: TimeCondition,
    #[serde(default)]
    pub has_heavy_item: bool,
}

impl ShoppingFactors {
    pub fn try_new(
        range: ShoppingRange,
        item_count: u32,
        distance: f64,
        weather: WeatherCondition,
        time_of_day: TimeCondition,
        has_heavy_item: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            range,
            item_count,
            distance: validate_distance(distance)?,
            weather,
            time_of_day,
            has_heavy_item,
        })
    }
}

/// WGS84 coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::LatitudeOutOfRange(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(ValidationError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }
}

impl std::str::FromStr for GeoPoint {
    type Err = ValidationError;

    /// Parse `"lat,lng"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ValidationError::UnknownValue {
            kind: "coordinate",
            value: s.to_string(),
        };
        let (lat, lng) = s.split_once(',').ok_or_else(unknown)?;
        let lat: f64 = lat.trim().parse().map_err(|_| unknown())?;
        let lng: f64 = lng.trim().parse().map_err(|_| unknown())?;
        GeoPoint::new(lat, lng)
    }
}

fn validate_distance(distance: f64) -> Result<f64, ValidationError> {
    if !distance.is_finite() {
        return Err(ValidationError::NonFiniteDistance);
    }
    if distance < 0.0 {
        return Err(ValidationError::NegativeDistance(distance));
    }
    if distance > MAX_DISTANCE_KM {
        return Err(ValidationError::DistanceTooLarge {
            distance,
            max: MAX_DISTANCE_KM,
        });
    }
    Ok(distance)
}
