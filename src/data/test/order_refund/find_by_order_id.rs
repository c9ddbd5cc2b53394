use super::*;

/// Tests looking up the refund of an order.
///
/// Expected: Ok(Some) for a refunded order, Ok(None) otherwise
#[tokio::test]
async fn finds_refund_for_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) =
        factory::helpers::create_order_in_status(db, OrderStatus::Delivered).await?;
    let (_, _, other_order) =
        factory::helpers::create_order_in_status(db, OrderStatus::Delivered).await?;
    let admin = factory::user::create_admin(db).await?;

    let repo = OrderRefundRepository::new(db);
    let created = repo
        .create(CreateRefundParams {
            order_id: order.id,
            refund_amount: Decimal::new(11000, 2),
            reason: "Order cancelled after delivery".to_string(),
            processed_by: admin.id,
        })
        .await?;

    let found = repo.find_by_order_id(order.id).await?;
    assert_eq!(found.map(|refund| refund.id), Some(created.id));

    let missing = repo.find_by_order_id(other_order.id).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the existence check used by the duplicate-refund guard.
///
/// Expected: Ok(true) after a refund is created, Ok(false) before
#[tokio::test]
async fn exists_for_order_reflects_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) =
        factory::helpers::create_order_in_status(db, OrderStatus::Shipped).await?;
    let admin = factory::user::create_admin(db).await?;

    let repo = OrderRefundRepository::new(db);
    assert!(!repo.exists_for_order(order.id).await?);

    repo.create(CreateRefundParams {
        order_id: order.id,
        refund_amount: Decimal::new(1000, 2),
        reason: "Partial refund".to_string(),
        processed_by: admin.id,
    })
    .await?;

    assert!(repo.exists_for_order(order.id).await?);

    Ok(())
}
