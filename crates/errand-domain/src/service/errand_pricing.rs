//! Delivery errand price calculation
//!
//! # Formula
//! ```text
//! distance_price    = round(km × price_per_km)
//! weather_surcharge = round((base + distance_price) × (multiplier − 1))
//! total             = round100(base + distance_price + weather + time + weight)
//! ```
//! Weather scales only the travel part (base + distance); time and weight
//! surcharges are flat. Every component is an integer before the single
//! final rounding, and the total never drops below `min_price`.

use crate::model::{
    MultiStopFactors, MultiStopPriceBreakdown, PriceBreakdown, PriceFactors, PricingTable,
    MAX_DISTANCE_KM,
};

/// Round a KRW amount to the nearest 100, halves upward
pub fn round_to_nearest_100(amount: i64) -> i64 {
    amount.saturating_add(50).div_euclid(100) * 100
}

/// Round a non-negative KRW amount to an integer; `as` saturates at the i64 bounds
pub(crate) fn round_won(amount: f64) -> i64 {
    amount.round() as i64
}

/// Negative, NaN, or infinite distances are billed as zero; anything
/// beyond `MAX_DISTANCE_KM` is billed as `MAX_DISTANCE_KM`
pub(crate) fn billable_distance(distance: f64) -> f64 {
    if distance.is_finite() && distance > 0.0 {
        distance.min(MAX_DISTANCE_KM)
    } else {
        0.0
    }
}

/// Final total: one rounding step, then the minimum fare
pub(crate) fn finalize_total(subtotal: i64, table: &PricingTable) -> i64 {
    round_to_nearest_100(subtotal).max(table.min_price)
}

fn components(factors: &PriceFactors, table: &PricingTable) -> PriceBreakdown {
    let base_price = table.base_price;
    let distance_price = round_won(billable_distance(factors.distance) * table.price_per_km as f64);
    let weight_surcharge = table.weight_surcharge(factors.weight);
    let time_surcharge = table.time_surcharge(factors.time_of_day);
    let multiplier = table.weather_multiplier(factors.weather);
    let weather_surcharge =
        round_won(base_price.saturating_add(distance_price) as f64 * (multiplier - 1.0));

    PriceBreakdown {
        base_price,
        distance_price,
        weather_surcharge,
        time_surcharge,
        weight_surcharge,
        total_price: 0,
    }
}

/// Quote a single-leg delivery. Total function: never fails.
pub fn calculate_errand_price(factors: &PriceFactors, table: &PricingTable) -> PriceBreakdown {
    let mut breakdown = components(factors, table);
    breakdown.total_price = finalize_total(breakdown.component_sum(), table);
    breakdown
}

/// Quote a delivery with intermediate stops
///
/// Each stop after the pickup adds `stop_fee`; the fee joins the component
/// sum before the final rounding.
pub fn calculate_multi_stop_price(
    factors: &MultiStopFactors,
    table: &PricingTable,
) -> MultiStopPriceBreakdown {
    let base = components(&factors.factors, table);
    let extra_stops = i64::from(factors.total_stops.saturating_sub(1));
    let stop_fee = extra_stops.saturating_mul(table.stop_fee);

    MultiStopPriceBreakdown {
        base_price: base.base_price,
        distance_price: base.distance_price,
        weather_surcharge: base.weather_surcharge,
        time_surcharge: base.time_surcharge,
        weight_surcharge: base.weight_surcharge,
        stop_fee,
        total_stops: factors.total_stops,
        total_price: finalize_total(base.component_sum().saturating_add(stop_fee), table),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use errand_types::{TimeCondition, WeatherCondition, WeightClass};

    fn factors(distance: f64) -> PriceFactors {
        PriceFactors {
            distance,
            ..PriceFactors::default()
        }
    }

    fn quote(factors: PriceFactors) -> PriceBreakdown {
        calculate_errand_price(&factors, &PricingTable::default())
    }

    // ==========================================
    // Reference scenarios
    // ==========================================

    #[test]
    fn test_zero_distance_minimum_fare() {
        let b = quote(factors(0.0));
        assert_eq!(b.base_price, 3000);
        assert_eq!(b.distance_price, 0);
        assert_eq!(b.total_price, 3000);
    }

    #[test]
    fn test_five_km_clear_day_light() {
        let b = quote(factors(5.0));
        assert_eq!(b.distance_price, 6000);
        assert_eq!(b.weather_surcharge, 0);
        assert_eq!(b.total_price, 9000);
    }

    #[test]
    fn test_five_km_rain() {
        let b = quote(PriceFactors {
            weather: WeatherCondition::Rain,
            ..factors(5.0)
        });
        assert_eq!(b.weather_surcharge, 1800);
        assert_eq!(b.total_price, 10800);
    }

    #[test]
    fn test_five_km_late_night_heavy() {
        let b = quote(PriceFactors {
            time_of_day: TimeCondition::LateNight,
            weight: WeightClass::Heavy,
            ..factors(5.0)
        });
        assert_eq!(b.weight_surcharge, 10000);
        assert_eq!(b.time_surcharge, 5000);
        assert_eq!(b.weather_surcharge, 0);
        assert_eq!(b.total_price, 24000);
    }

    #[test]
    fn test_weather_ignores_flat_surcharges() {
        // round((3000 + 6000) × 0.5) = 4500, unaffected by the 12000 of flat surcharges
        let b = quote(PriceFactors {
            distance: 5.0,
            weather: WeatherCondition::Extreme,
            time_of_day: TimeCondition::RushHour,
            weight: WeightClass::Heavy,
        });
        assert_eq!(b.weather_surcharge, 4500);
        assert_eq!(b.total_price, 3000 + 6000 + 4500 + 2000 + 10000);
    }

    #[test]
    fn test_fractional_distance_rounds_once() {
        // 2.37km → 2844; subtotal 5844 → 5800
        let b = quote(factors(2.37));
        assert_eq!(b.distance_price, 2844);
        assert_eq!(b.component_sum(), 5844);
        assert_eq!(b.total_price, 5800);
    }

    #[test]
    fn test_snow_surcharge_pre_rounded() {
        // 1.3km → 1560; (3000 + 1560) × 0.4 = 1824
        let b = quote(PriceFactors {
            weather: WeatherCondition::Snow,
            ..factors(1.3)
        });
        assert_eq!(b.distance_price, 1560);
        assert_eq!(b.weather_surcharge, 1824);
        assert_eq!(b.total_price, 6400);
    }

    // ==========================================
    // Properties
    // ==========================================

    fn all_factors(distance: f64) -> Vec<PriceFactors> {
        let mut out = Vec::new();
        for weather in WeatherCondition::ALL {
            for time_of_day in TimeCondition::ALL {
                for weight in WeightClass::ALL {
                    out.push(PriceFactors {
                        distance,
                        weather,
                        time_of_day,
                        weight,
                    });
                }
            }
        }
        out
    }

    const DISTANCES: [f64; 9] = [0.0, 0.04, 0.5, 1.0, 2.37, 5.0, 12.75, 33.3, 120.0];

    #[test]
    fn test_total_is_multiple_of_100_and_at_least_base() {
        for distance in DISTANCES {
            for f in all_factors(distance) {
                let b = quote(f);
                assert_eq!(b.total_price % 100, 0, "{:?}", f);
                assert!(b.total_price >= b.base_price, "{:?}", f);
                assert!(b.weather_surcharge >= 0 && b.time_surcharge >= 0 && b.weight_surcharge >= 0);
            }
        }
    }

    #[test]
    fn test_total_equals_rounded_component_sum() {
        for distance in DISTANCES {
            for f in all_factors(distance) {
                let b = quote(f);
                assert_eq!(b.total_price, round_to_nearest_100(b.component_sum()));
            }
        }
    }

    #[test]
    fn test_monotonic_in_distance() {
        for f in all_factors(0.0) {
            let mut previous = 0;
            for step in 0..400 {
                let total = quote(PriceFactors {
                    distance: step as f64 * 0.1,
                    ..f
                })
                .total_price;
                assert!(total >= previous, "{:?} at {}km", f, step as f64 * 0.1);
                previous = total;
            }
        }
    }

    #[test]
    fn test_monotonic_in_weather() {
        for distance in DISTANCES {
            for f in all_factors(distance) {
                let at = |weather| quote(PriceFactors { weather, ..f }).total_price;
                assert!(at(WeatherCondition::Extreme) >= at(WeatherCondition::Snow));
                assert!(at(WeatherCondition::Snow) >= at(WeatherCondition::Rain));
                assert!(at(WeatherCondition::Rain) >= at(WeatherCondition::Clear));
            }
        }
    }

    #[test]
    fn test_clear_day_light_is_cheapest() {
        for distance in DISTANCES {
            let cheapest = quote(factors(distance)).total_price;
            for f in all_factors(distance) {
                assert!(quote(f).total_price >= cheapest);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for f in all_factors(7.77) {
            assert_eq!(quote(f), quote(f));
        }
    }

    // ==========================================
    // Edge cases
    // ==========================================

    #[test]
    fn test_negative_distance_billed_as_zero() {
        assert_eq!(quote(factors(-3.0)), quote(factors(0.0)));
    }

    #[test]
    fn test_non_finite_distance_billed_as_zero() {
        assert_eq!(quote(factors(f64::NAN)), quote(factors(0.0)));
        assert_eq!(quote(factors(f64::INFINITY)), quote(factors(0.0)));
    }

    #[test]
    fn test_distance_beyond_max_billed_at_max() {
        let capped = quote(factors(MAX_DISTANCE_KM));
        assert_eq!(capped.distance_price, 24_000_000);
        assert_eq!(quote(factors(1e16)), capped);
        assert_eq!(quote(factors(f64::MAX)), capped);

        let mut previous = quote(factors(5.0)).total_price;
        for distance in [1e3, MAX_DISTANCE_KM, 1e15, 1e16, 1e300] {
            let total = quote(factors(distance)).total_price;
            assert!(total >= previous, "{}km", distance);
            previous = total;
        }
    }

    #[test]
    fn test_extreme_rate_card_saturates() {
        let table = PricingTable {
            price_per_km: i64::MAX,
            stop_fee: i64::MAX,
            ..PricingTable::default()
        };
        let heavy_storm = PriceFactors {
            distance: 5.0,
            weather: WeatherCondition::Extreme,
            time_of_day: TimeCondition::LateNight,
            weight: WeightClass::Heavy,
        };
        let b = calculate_errand_price(&heavy_storm, &table);
        assert_eq!(b.component_sum(), i64::MAX);
        assert_eq!(b.total_price % 100, 0);
        assert!(b.total_price >= b.base_price);

        let multi = calculate_multi_stop_price(
            &MultiStopFactors {
                factors: heavy_storm,
                total_stops: u32::MAX,
            },
            &table,
        );
        assert_eq!(multi.stop_fee, i64::MAX);
        assert_eq!(multi.total_price, b.total_price);
    }

    #[test]
    fn test_min_price_floor() {
        let table = PricingTable {
            base_price: 1000,
            ..PricingTable::default()
        };
        let b = calculate_errand_price(&factors(0.5), &table);
        // 1000 + 600 = 1600 < 3000
        assert_eq!(b.total_price, 3000);
    }

    #[test]
    fn test_round_to_nearest_100() {
        assert_eq!(round_to_nearest_100(0), 0);
        assert_eq!(round_to_nearest_100(49), 0);
        assert_eq!(round_to_nearest_100(50), 100);
        assert_eq!(round_to_nearest_100(5849), 5800);
        assert_eq!(round_to_nearest_100(5850), 5900);
        assert_eq!(round_to_nearest_100(-150), -100);
        assert_eq!(round_to_nearest_100(-151), -200);
        assert_eq!(round_to_nearest_100(i64::MAX), i64::MAX / 100 * 100);
    }

    // ==========================================
    // Multi-stop
    // ==========================================

    #[test]
    fn test_multi_stop_adds_fee_per_extra_stop() {
        let b = calculate_multi_stop_price(
            &MultiStopFactors {
                factors: factors(5.0),
                total_stops: 3,
            },
            &PricingTable::default(),
        );
        assert_eq!(b.stop_fee, 3000);
        assert_eq!(b.total_stops, 3);
        assert_eq!(b.total_price, 12000);
    }

    #[test]
    fn test_single_stop_matches_plain_quote() {
        for f in all_factors(4.2) {
            let multi = calculate_multi_stop_price(
                &MultiStopFactors {
                    factors: f,
                    total_stops: 1,
                },
                &PricingTable::default(),
            );
            assert_eq!(multi.stop_fee, 0);
            assert_eq!(multi.as_price_breakdown(), quote(f));
        }
    }

    #[test]
    fn test_zero_stops_charges_no_fee() {
        let b = calculate_multi_stop_price(
            &MultiStopFactors {
                factors: factors(1.0),
                total_stops: 0,
            },
            &PricingTable::default(),
        );
        assert_eq!(b.stop_fee, 0);
    }

    #[test]
    fn test_multi_stop_rounds_once() {
        // 2.37km: 5844 + 1500 = 7344 → 7300
        let b = calculate_multi_stop_price(
            &MultiStopFactors {
                factors: factors(2.37),
                total_stops: 2,
            },
            &PricingTable::default(),
        );
        assert_eq!(b.total_price, 7300);
    }
}
