//! Purchase-on-behalf price calculation

use errand_types::{ShoppingRange, WeightClass};

use super::errand_pricing::{billable_distance, finalize_total, round_won};
use crate::model::{PricingTable, ShoppingFactors, ShoppingPriceBreakdown};

/// Quote a shopping errand
///
/// Range fee is fixed per radius, or distance-priced for a named store.
/// The first `free_items` items are included. Weather scales base + range
/// fee; a heavy item adds the heavy weight surcharge.
pub fn calculate_shopping_price(
    factors: &ShoppingFactors,
    table: &PricingTable,
) -> ShoppingPriceBreakdown {
    let base_price = table.shopping.base_price;
    let range_fee = if is_distance_priced(factors.range) {
        round_won(billable_distance(factors.distance) * table.price_per_km as f64)
    } else {
        table.shopping_range_fee(factors.range).unwrap_or_default()
    };
    let chargeable_items = factors.item_count.saturating_sub(table.shopping.free_items);
    let item_fee = i64::from(chargeable_items).saturating_mul(table.shopping.item_price);
    let multiplier = table.weather_multiplier(factors.weather);
    let weather_surcharge =
        round_won(base_price.saturating_add(range_fee) as f64 * (multiplier - 1.0));
    let time_surcharge = table.time_surcharge(factors.time_of_day);
    let heavy_item_surcharge = if factors.has_heavy_item {
        table.weight_surcharge(WeightClass::Heavy)
    } else {
        0
    };

    let mut breakdown = ShoppingPriceBreakdown {
        base_price,
        range_fee,
        item_fee,
        weather_surcharge,
        time_surcharge,
        heavy_item_surcharge,
        total_price: 0,
    };
    breakdown.total_price = finalize_total(breakdown.component_sum(), table);
    breakdown
}

/// Whether the range is priced by distance
pub fn is_distance_priced(range: ShoppingRange) -> bool {
    range == ShoppingRange::Specific
}

#[cfg(test)]
mod tests {
    use super::*;
    use errand_types::{TimeCondition, WeatherCondition};

    fn shopping(range: ShoppingRange, item_count: u32) -> ShoppingFactors {
        ShoppingFactors {
            range,
            item_count,
            ..ShoppingFactors::default()
        }
    }

    fn quote(factors: ShoppingFactors) -> ShoppingPriceBreakdown {
        calculate_shopping_price(&factors, &PricingTable::default())
    }

    #[test]
    fn test_local_two_items_is_base_only() {
        let b = quote(shopping(ShoppingRange::Local, 2));
        assert_eq!(b.range_fee, 0);
        assert_eq!(b.item_fee, 0);
        assert_eq!(b.total_price, 5000);
    }

    #[test]
    fn test_district_four_items() {
        let b = quote(shopping(ShoppingRange::District, 4));
        assert_eq!(b.range_fee, 3000);
        assert_eq!(b.item_fee, 1000);
        assert_eq!(b.total_price, 9000);
    }

    #[test]
    fn test_city_range() {
        let b = quote(shopping(ShoppingRange::City, 0));
        assert_eq!(b.range_fee, 8000);
        assert_eq!(b.total_price, 13000);
    }

    #[test]
    fn test_specific_range_priced_by_distance() {
        let b = quote(ShoppingFactors {
            distance: 2.5,
            ..shopping(ShoppingRange::Specific, 1)
        });
        assert_eq!(b.range_fee, 3000);
        assert_eq!(b.total_price, 8000);
    }

    #[test]
    fn test_distance_ignored_for_fixed_ranges() {
        let near = quote(shopping(ShoppingRange::District, 3));
        let far = quote(ShoppingFactors {
            distance: 50.0,
            ..shopping(ShoppingRange::District, 3)
        });
        assert_eq!(near, far);
    }

    #[test]
    fn test_weather_scales_base_and_range_only() {
        // (5000 + 3000) × 0.2 = 1600; items and night fee untouched
        let b = quote(ShoppingFactors {
            weather: WeatherCondition::Rain,
            time_of_day: TimeCondition::LateNight,
            ..shopping(ShoppingRange::District, 5)
        });
        assert_eq!(b.weather_surcharge, 1600);
        assert_eq!(b.item_fee, 1500);
        assert_eq!(b.time_surcharge, 5000);
        assert_eq!(b.total_price, 5000 + 3000 + 1500 + 1600 + 5000);
    }

    #[test]
    fn test_heavy_item_surcharge() {
        let b = quote(ShoppingFactors {
            has_heavy_item: true,
            ..shopping(ShoppingRange::Local, 1)
        });
        assert_eq!(b.heavy_item_surcharge, 10000);
        assert_eq!(b.total_price, 15000);
    }

    #[test]
    fn test_total_always_round() {
        for range in ShoppingRange::ALL {
            for weather in WeatherCondition::ALL {
                for item_count in 0..8 {
                    let b = quote(ShoppingFactors {
                        range,
                        item_count,
                        distance: 3.33,
                        weather,
                        ..ShoppingFactors::default()
                    });
                    assert_eq!(b.total_price % 100, 0);
                    assert!(b.total_price >= b.base_price);
                }
            }
        }
    }

    #[test]
    fn test_is_distance_priced() {
        let table = PricingTable::default();
        for range in ShoppingRange::ALL {
            assert_eq!(
                is_distance_priced(range),
                table.shopping_range_fee(range).is_none(),
                "{:?}",
                range
            );
        }
        assert!(is_distance_priced(ShoppingRange::Specific));
    }
}
