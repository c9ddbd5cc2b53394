use super::*;

/// Tests the audit trail after a sequence of transitions.
///
/// Expected: Ok with one entry per transition, oldest first
#[tokio::test]
async fn returns_entries_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) = factory::helpers::create_order_with_dependencies(db)
        .await
        .unwrap();
    let admin = factory::user::create_admin(db).await.unwrap();

    let service = OrderService::new(db);
    service
        .update_status(order.id, OrderStatus::Processing, None, admin.id)
        .await?;
    service
        .update_status(order.id, OrderStatus::Shipped, None, admin.id)
        .await?;

    let timeline = service.get_timeline(order.id).await?;

    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].old_status, Some(OrderStatus::Pending));
    assert_eq!(timeline[0].new_status, OrderStatus::Processing);
    assert_eq!(timeline[1].old_status, Some(OrderStatus::Processing));
    assert_eq!(timeline[1].new_status, OrderStatus::Shipped);
    assert_eq!(timeline[0].changed_by, admin.id);

    Ok(())
}

/// Tests the timeline of an order with no recorded transitions.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_order_without_history() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) = factory::helpers::create_order_with_dependencies(db)
        .await
        .unwrap();

    let service = OrderService::new(db);
    let timeline = service.get_timeline(order.id).await?;

    assert!(timeline.is_empty());

    Ok(())
}

/// Tests the timeline of an order that does not exist.
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

    let service = OrderService::new(db);
    let result = service.get_timeline(999999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
