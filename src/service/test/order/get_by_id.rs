use super::*;

/// Tests the full order detail view.
///
/// Expected: Ok(Some) with customer, shipping address, and line items
#[tokio::test]
async fn returns_full_detail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, address, product, order, item) = factory::helpers::create_order_with_item(db)
        .await
        .unwrap();

    let service = OrderService::new(db);
    let detail = service.get_by_id(order.id).await?.unwrap();

    assert_eq!(detail.id, order.id);
    assert_eq!(detail.order_number, order.order_number);
    assert_eq!(detail.status, order.status);
    assert_eq!(detail.total, order.total);

    assert_eq!(detail.customer.id, user.id);
    assert_eq!(detail.customer.full_name, user.full_name);
    assert_eq!(detail.customer.email, user.email);

    assert_eq!(detail.shipping_address.id, address.id);
    assert_eq!(detail.shipping_address.city, address.city);

    assert_eq!(detail.items.len(), 1);
    assert_eq!(detail.items[0].id, item.id);
    assert_eq!(detail.items[0].product_id, product.id);
    assert_eq!(detail.items[0].product_name, product.name);
    assert_eq!(detail.items[0].quantity, item.quantity);

    Ok(())
}

/// Tests the detail view of an order with no line items.
///
/// Expected: Ok(Some) with an empty item list
#[tokio::test]
async fn returns_detail_without_items() -> Result<(), AppError> {
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
    let detail = service.get_by_id(order.id).await?.unwrap();

    assert!(detail.items.is_empty());

    Ok(())
}

/// Tests looking up an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OrderService::new(db);
    let detail = service.get_by_id(999999).await?;

    assert!(detail.is_none());

    Ok(())
}
