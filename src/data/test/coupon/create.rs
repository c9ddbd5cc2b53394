use super::*;

/// Tests creating a coupon with all fields set.
///
/// Expected: Ok with usage_count starting at zero
#[tokio::test]
async fn creates_coupon_with_zero_usage_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coupon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expires_at = Utc::now() + Duration::days(14);
    let repo = CouponRepository::new(db);
    let coupon = repo
        .create(CreateCouponParams {
            code: "SUMMER20".to_string(),
            coupon_type: CouponType::Percentage,
            value: Decimal::new(2000, 2),
            min_purchase: Decimal::new(5000, 2),
            max_discount: Some(Decimal::new(3000, 2)),
            usage_limit: 50,
            expires_at,
            is_active: true,
        })
        .await?;

    assert_eq!(coupon.code, "SUMMER20");
    assert_eq!(coupon.coupon_type, CouponType::Percentage);
    assert_eq!(coupon.value, Decimal::new(2000, 2));
    assert_eq!(coupon.min_purchase, Decimal::new(5000, 2));
    assert_eq!(coupon.max_discount, Some(Decimal::new(3000, 2)));
    assert_eq!(coupon.usage_limit, 50);
    assert_eq!(coupon.usage_count, 0);
    assert!(coupon.is_active);

    Ok(())
}

/// Tests the unique constraint on coupon codes.
///
/// Expected: Err(DbErr) when inserting a duplicate code
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_coupon_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::coupon::create_coupon(db).await?;

    let repo = CouponRepository::new(db);
    let result = repo
        .create(CreateCouponParams {
            code: existing.code,
            coupon_type: CouponType::Fixed,
            value: Decimal::new(500, 2),
            min_purchase: Decimal::ZERO,
            max_discount: None,
            usage_limit: 10,
            expires_at: Utc::now() + Duration::days(7),
            is_active: true,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
