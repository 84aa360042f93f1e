//! Domain model types

pub mod breakdown;
pub mod factors;
pub mod pricing_table;
pub mod quote;

pub use breakdown::{
    MultiStopPriceBreakdown, PriceBreakdown, PriceVerification, RouteEstimate,
    ShoppingPriceBreakdown,
};
pub use factors::{GeoPoint, MultiStopFactors, PriceFactors, ShoppingFactors, MAX_DISTANCE_KM};
pub use pricing_table::{
    PricingTable, ShoppingFees, TimeSurcharges, WeatherMultipliers, WeightSurcharges,
};
pub use quote::{Quote, QuoteRecord};
