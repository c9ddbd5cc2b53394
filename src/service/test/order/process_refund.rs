use super::*;

/// Tests refunding a delivered order.
///
/// Expected: Ok, refund recorded, order forced into Refunded, history noted
#[tokio::test]
async fn refunds_delivered_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) =
        factory::helpers::create_order_in_status(db, OrderStatus::Delivered)
            .await
            .unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();

    let service = OrderService::new(db);
    service
        .process_refund(
            order.id,
            Decimal::new(5000, 2),
            "Damaged in transit".to_string(),
            admin.id,
        )
        .await?;

    let updated = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Refunded);

    let refund = OrderRefundRepository::new(db)
        .find_by_order_id(order.id)
        .await?
        .unwrap();
    assert_eq!(refund.refund_amount, Decimal::new(5000, 2));
    assert_eq!(refund.reason, "Damaged in transit");
    assert_eq!(refund.processed_by, admin.id);

    let history = OrderStatusHistoryRepository::new(db)
        .get_by_order_id(order.id)
        .await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].new_status, OrderStatus::Refunded);
    assert_eq!(
        history[0].notes,
        Some("Refund processed: Damaged in transit".to_string())
    );

    Ok(())
}

/// Tests that the audit record captures the status the order was actually in.
///
/// Expected: history old_status is Shipped for an order refunded while shipped
#[tokio::test]
async fn records_prior_status_in_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) =
        factory::helpers::create_order_in_status(db, OrderStatus::Shipped)
            .await
            .unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();

    let service = OrderService::new(db);
    service
        .process_refund(
            order.id,
            Decimal::new(2500, 2),
            "Late delivery".to_string(),
            admin.id,
        )
        .await?;

    let history = OrderStatusHistoryRepository::new(db)
        .get_by_order_id(order.id)
        .await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].old_status, Some(OrderStatus::Shipped));
    assert_eq!(history[0].new_status, OrderStatus::Refunded);

    Ok(())
}

/// Tests a refund equal to the order total.
///
/// Expected: Ok, the full total may be refunded
#[tokio::test]
async fn allows_refund_equal_to_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) =
        factory::helpers::create_order_in_status(db, OrderStatus::Delivered)
            .await
            .unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();

    let service = OrderService::new(db);
    service
        .process_refund(
            order.id,
            order.total,
            "Full refund".to_string(),
            admin.id,
        )
        .await?;

    let refund = OrderRefundRepository::new(db)
        .find_by_order_id(order.id)
        .await?
        .unwrap();
    assert_eq!(refund.refund_amount, order.total);

    Ok(())
}

/// Tests a refund exceeding the order total.
///
/// Expected: Err(InvalidAmount) and no refund recorded
#[tokio::test]
async fn rejects_refund_exceeding_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) =
        factory::helpers::create_order_in_status(db, OrderStatus::Delivered)
            .await
            .unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();

    let service = OrderService::new(db);
    let result = service
        .process_refund(
            order.id,
            order.total + Decimal::ONE,
            "Too generous".to_string(),
            admin.id,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::InvalidAmount { .. }))
    ));
    assert!(!OrderRefundRepository::new(db)
        .exists_for_order(order.id)
        .await?);

    Ok(())
}

/// Tests refunding an order that has not shipped.
///
/// Expected: Err(InvalidState) for pending and cancelled orders
#[tokio::test]
async fn rejects_refund_for_unshipped_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await.unwrap();
    let service = OrderService::new(db);

    for status in [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Cancelled,
        OrderStatus::Refunded,
    ] {
        let (_user, _address, order) = factory::helpers::create_order_in_status(db, status)
            .await
            .unwrap();
        let result = service
            .process_refund(
                order.id,
                Decimal::new(1000, 2),
                "Changed my mind".to_string(),
                admin.id,
            )
            .await;
        assert!(matches!(
            result,
            Err(AppError::OrderErr(OrderError::InvalidState { .. }))
        ));
    }

    Ok(())
}

/// Tests a second refund against an already-refunded order.
///
/// Expected: first refund Ok, second rejected without touching order state
#[tokio::test]
async fn rejects_second_refund() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address, _order) = factory::helpers::create_order_with_dependencies(db)
        .await
        .unwrap();
    let order = factory::order::OrderFactory::new(db, user.id, address.id)
        .status(OrderStatus::Delivered)
        .total(Decimal::new(20000, 2))
        .build()
        .await
        .unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();

    let service = OrderService::new(db);
    service
        .process_refund(
            order.id,
            Decimal::new(15000, 2),
            "Partial refund".to_string(),
            admin.id,
        )
        .await?;

    let result = service
        .process_refund(
            order.id,
            Decimal::new(5000, 2),
            "Second partial refund".to_string(),
            admin.id,
        )
        .await;

    // The first refund moved the order to Refunded, so the state guard
    // fires before the duplicate check.
    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::InvalidState {
            status: OrderStatus::Refunded,
        }))
    ));

    let updated = entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Refunded);

    let refund = OrderRefundRepository::new(db)
        .find_by_order_id(order.id)
        .await?
        .unwrap();
    assert_eq!(refund.refund_amount, Decimal::new(15000, 2));

    let history = OrderStatusHistoryRepository::new(db)
        .get_by_order_id(order.id)
        .await?;
    assert_eq!(history.len(), 1);

    Ok(())
}

/// Tests the duplicate-refund guard directly.
///
/// Expected: Err(DuplicateRefund) when a refund row already exists for an
/// order still in a refundable status
#[tokio::test]
async fn rejects_duplicate_refund_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) =
        factory::helpers::create_order_in_status(db, OrderStatus::Delivered)
            .await
            .unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();

    // A refund row without the matching status change, as if written by an
    // earlier version that did not force the Refunded status.
    OrderRefundRepository::new(db)
        .create(crate::model::order::CreateRefundParams {
            order_id: order.id,
            refund_amount: Decimal::new(1000, 2),
            reason: "Previously recorded".to_string(),
            processed_by: admin.id,
        })
        .await?;

    let service = OrderService::new(db);
    let result = service
        .process_refund(
            order.id,
            Decimal::new(1000, 2),
            "Second attempt".to_string(),
            admin.id,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::OrderErr(OrderError::DuplicateRefund { .. }))
    ));

    Ok(())
}

/// Tests refunding an order that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_nonexistent_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await.unwrap();

    let service = OrderService::new(db);
    let result = service
        .process_refund(
            999999,
            Decimal::new(1000, 2),
            "No such order".to_string(),
            admin.id,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
