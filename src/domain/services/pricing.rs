use crate::domain::models::promo_code::{PromoCode, PROMO_TYPE_FIXED, PROMO_TYPE_PERCENTAGE};
use chrono::{DateTime, Utc};

/// Computes the final booking total from the undiscounted base price.
///
/// An absent, expired, or unrecognized promo applies no discount; the caller
/// does not get an error. Percentage discounts use integer division, so the
/// discount floors. The result is clamped at zero.
pub fn total_price(base: i64, promo: Option<&PromoCode>, now: DateTime<Utc>) -> i64 {
    let discounted = match promo {
        Some(promo) if !promo.is_expired(now) => match promo.kind.as_str() {
            PROMO_TYPE_PERCENTAGE => base - base * promo.value / 100,
            PROMO_TYPE_FIXED => base - promo.value,
            _ => base,
        },
        _ => base,
    };
    discounted.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn promo(kind: &str, value: i64, expires_at: Option<DateTime<Utc>>) -> PromoCode {
        PromoCode::new("TEST".to_string(), kind.to_string(), value, expires_at)
    }

    #[test]
    fn test_no_promo_keeps_base() {
        assert_eq!(total_price(200, None, Utc::now()), 200);
    }

    #[test]
    fn test_percentage_discount_floors() {
        let p = promo("percentage", 10, None);
        // 99 * 10 / 100 = 9 (floored), not 9.9
        assert_eq!(total_price(99, Some(&p), Utc::now()), 90);
        assert_eq!(total_price(200, Some(&p), Utc::now()), 180);
    }

    #[test]
    fn test_fixed_discount() {
        let p = promo("fixed", 50, None);
        assert_eq!(total_price(200, Some(&p), Utc::now()), 150);
    }

    #[test]
    fn test_total_never_negative() {
        let p = promo("fixed", 500, None);
        assert_eq!(total_price(200, Some(&p), Utc::now()), 0);
    }

    #[test]
    fn test_expired_promo_ignored() {
        let p = promo("percentage", 50, Some(Utc::now() - Duration::hours(1)));
        assert_eq!(total_price(200, Some(&p), Utc::now()), 200);
    }

    #[test]
    fn test_future_expiry_applies() {
        let p = promo("percentage", 50, Some(Utc::now() + Duration::hours(1)));
        assert_eq!(total_price(200, Some(&p), Utc::now()), 100);
    }

    #[test]
    fn test_unknown_type_ignored() {
        let p = promo("flat", 50, None);
        assert_eq!(total_price(200, Some(&p), Utc::now()), 200);
    }
}
