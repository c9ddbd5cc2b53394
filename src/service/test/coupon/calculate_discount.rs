use super::*;

fn coupon(coupon_type: CouponType, value: Decimal, max_discount: Option<Decimal>) -> Coupon {
    Coupon {
        id: 1,
        code: "TESTCODE".to_string(),
        coupon_type,
        value,
        min_purchase: Decimal::ZERO,
        max_discount,
        usage_limit: 100,
        usage_count: 0,
        expires_at: Utc::now() + Duration::days(30),
        is_active: true,
        created_at: Utc::now(),
    }
}

/// Tests the percentage scheme.
///
/// Expected: 20% of 100.00 is 20.00
#[test]
fn percentage_discount_on_subtotal() {
    let coupon = coupon(CouponType::Percentage, Decimal::from(20), None);

    let discount = CouponService::calculate_discount(&coupon, Decimal::new(10000, 2));

    assert_eq!(discount, Decimal::new(2000, 2));
}

/// Tests the max-discount cap on percentage coupons.
///
/// Expected: 20% of 100.00 capped at 15.00
#[test]
fn percentage_discount_capped_at_max() {
    let coupon = coupon(
        CouponType::Percentage,
        Decimal::from(20),
        Some(Decimal::new(1500, 2)),
    );

    let discount = CouponService::calculate_discount(&coupon, Decimal::new(10000, 2));

    assert_eq!(discount, Decimal::new(1500, 2));
}

/// Tests a percentage value over 100 without a max-discount cap.
///
/// Expected: 150% of 100.00 is 150.00, not capped at the subtotal
#[test]
fn percentage_discount_can_exceed_subtotal() {
    let coupon = coupon(CouponType::Percentage, Decimal::from(150), None);

    let discount = CouponService::calculate_discount(&coupon, Decimal::new(10000, 2));

    assert_eq!(discount, Decimal::new(15000, 2));
}

/// Tests half-up rounding of percentage discounts.
///
/// Expected: 15% of 33.33 is 4.9995, rounded to 5.00
#[test]
fn percentage_discount_rounds_half_up() {
    let coupon = coupon(CouponType::Percentage, Decimal::from(15), None);

    let discount = CouponService::calculate_discount(&coupon, Decimal::new(3333, 2));

    assert_eq!(discount, Decimal::new(500, 2));
}

/// Tests the fixed scheme.
///
/// Expected: a fixed 10.00 off 100.00 is 10.00
#[test]
fn fixed_discount_below_subtotal() {
    let coupon = coupon(CouponType::Fixed, Decimal::new(1000, 2), None);

    let discount = CouponService::calculate_discount(&coupon, Decimal::new(10000, 2));

    assert_eq!(discount, Decimal::new(1000, 2));
}

/// Tests the subtotal cap on fixed coupons.
///
/// Expected: a fixed 50.00 off 30.00 is capped at 30.00
#[test]
fn fixed_discount_capped_at_subtotal() {
    let coupon = coupon(CouponType::Fixed, Decimal::new(5000, 2), None);

    let discount = CouponService::calculate_discount(&coupon, Decimal::new(3000, 2));

    assert_eq!(discount, Decimal::new(3000, 2));
}
