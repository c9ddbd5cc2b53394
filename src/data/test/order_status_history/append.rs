use super::*;

/// Tests appending a history record with an old status.
///
/// Expected: Ok with all fields stored as given
#[tokio::test]
async fn appends_record_with_old_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let repo = OrderStatusHistoryRepository::new(db);
    let record = repo
        .append(AppendHistoryParams {
            order_id: order.id,
            old_status: Some(OrderStatus::Pending),
            new_status: OrderStatus::Processing,
            changed_by: admin.id,
            notes: Some("Started picking".to_string()),
        })
        .await?;

    assert_eq!(record.order_id, order.id);
    assert_eq!(record.old_status, Some(OrderStatus::Pending));
    assert_eq!(record.new_status, OrderStatus::Processing);
    assert_eq!(record.changed_by, admin.id);
    assert_eq!(record.notes, Some("Started picking".to_string()));

    Ok(())
}

/// Tests appending the first record of an order, which has no old status.
///
/// Expected: Ok with old_status None
#[tokio::test]
async fn appends_first_record_without_old_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _address, order) = factory::helpers::create_order_with_dependencies(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let repo = OrderStatusHistoryRepository::new(db);
    let record = repo
        .append(AppendHistoryParams {
            order_id: order.id,
            old_status: None,
            new_status: OrderStatus::Pending,
            changed_by: admin.id,
            notes: None,
        })
        .await?;

    assert_eq!(record.old_status, None);
    assert_eq!(record.new_status, OrderStatus::Pending);
    assert_eq!(record.notes, None);

    Ok(())
}

/// Tests foreign key constraint on order_id.
///
/// Expected: Err(DbErr) due to foreign key constraint violation
#[tokio::test]
async fn fails_for_nonexistent_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;

    let repo = OrderStatusHistoryRepository::new(db);
    let result = repo
        .append(AppendHistoryParams {
            order_id: 999999,
            old_status: None,
            new_status: OrderStatus::Pending,
            changed_by: admin.id,
            notes: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
