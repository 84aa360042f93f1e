//! Domain services

pub mod distance;
pub mod errand_pricing;
pub mod price_verification;
pub mod shopping_pricing;
pub mod time_condition;

pub use distance::{estimate_route, haversine_km};
pub use errand_pricing::{calculate_errand_price, calculate_multi_stop_price, round_to_nearest_100};
pub use price_verification::verify_client_price;
pub use shopping_pricing::{calculate_shopping_price, is_distance_priced};
pub use time_condition::{current_time_condition, time_condition_at_hour, time_condition_for};
