//! Client/server price reconciliation
//!
//! The requester's screen computes its own estimate. The server recomputes
//! and keeps the client figure only when it lies within `price_tolerance`
//! of the server figure; otherwise the server price wins. The tip is added
//! last.

use crate::model::{PriceVerification, PricingTable};

pub fn verify_client_price(
    client_price: Option<i64>,
    server_price: i64,
    tip: i64,
    table: &PricingTable,
) -> PriceVerification {
    let client_price = client_price.unwrap_or(0);
    let tip = tip.max(0);
    let difference = client_price.abs_diff(server_price) as f64;
    let within_tolerance = difference <= server_price as f64 * table.price_tolerance;
    let accepted_price = if within_tolerance {
        client_price
    } else {
        server_price
    };

    PriceVerification {
        client_price,
        server_price,
        accepted_price,
        tip,
        final_price: accepted_price.saturating_add(tip),
        within_tolerance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verify(client: Option<i64>, server: i64, tip: i64) -> PriceVerification {
        verify_client_price(client, server, tip, &PricingTable::default())
    }

    #[test]
    fn test_exact_match() {
        let v = verify(Some(9000), 9000, 0);
        assert!(v.within_tolerance);
        assert_eq!(v.final_price, 9000);
    }

    #[test]
    fn test_client_price_kept_within_ten_percent() {
        let v = verify(Some(9900), 9000, 0);
        assert!(v.within_tolerance);
        assert_eq!(v.accepted_price, 9900);

        let v = verify(Some(8100), 9000, 0);
        assert_eq!(v.accepted_price, 8100);
    }

    #[test]
    fn test_server_price_used_outside_tolerance() {
        let v = verify(Some(9901), 9000, 0);
        assert!(!v.within_tolerance);
        assert_eq!(v.accepted_price, 9000);

        let v = verify(Some(5000), 9000, 0);
        assert_eq!(v.accepted_price, 9000);
    }

    #[test]
    fn test_missing_client_price_uses_server() {
        let v = verify(None, 9000, 0);
        assert_eq!(v.client_price, 0);
        assert_eq!(v.accepted_price, 9000);
    }

    #[test]
    fn test_tip_added_after_reconciliation() {
        let v = verify(Some(9500), 9000, 2000);
        assert_eq!(v.accepted_price, 9500);
        assert_eq!(v.final_price, 11500);
    }

    #[test]
    fn test_negative_tip_ignored() {
        let v = verify(Some(9000), 9000, -500);
        assert_eq!(v.tip, 0);
        assert_eq!(v.final_price, 9000);
    }

    #[test]
    fn test_extreme_tip_saturates() {
        let v = verify(Some(9000), 9000, i64::MAX);
        assert_eq!(v.tip, i64::MAX);
        assert_eq!(v.final_price, i64::MAX);
    }

    #[test]
    fn test_extreme_client_prices_fall_back_to_server() {
        for client in [i64::MIN, -1, i64::MAX] {
            let v = verify(Some(client), 9000, 500);
            assert!(!v.within_tolerance, "{}", client);
            assert_eq!(v.accepted_price, 9000);
            assert_eq!(v.final_price, 9500);
        }
    }

    #[test]
    fn test_zero_tolerance_requires_exact() {
        let table = PricingTable {
            price_tolerance: 0.0,
            ..PricingTable::default()
        };
        assert!(verify_client_price(Some(9000), 9000, 0, &table).within_tolerance);
        assert!(!verify_client_price(Some(9100), 9000, 0, &table).within_tolerance);
    }
}
