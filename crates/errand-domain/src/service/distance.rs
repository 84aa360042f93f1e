//! Distance estimation between coordinates

use crate::model::{GeoPoint, PricingTable, RouteEstimate};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in km (haversine), two decimals
pub fn haversine_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    round_to(EARTH_RADIUS_KM * c, 2)
}

/// Road leg estimate used when no routing service answer is available
///
/// Road distance is the straight line scaled by `road_distance_factor`
/// (one decimal); duration assumes `average_speed_kmh`.
pub fn estimate_route(from: &GeoPoint, to: &GeoPoint, table: &PricingTable) -> RouteEstimate {
    let straight_km = haversine_km(from, to);
    let road_km = straight_km * table.road_distance_factor;
    let duration_min = (road_km / table.average_speed_kmh * 60.0).round() as u32;

    RouteEstimate {
        straight_km,
        distance_km: round_to(road_km, 1),
        duration_min,
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
