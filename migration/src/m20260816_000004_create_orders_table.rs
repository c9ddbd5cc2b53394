use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260815_000001_create_user_table::User, m20260815_000002_create_address_table::Address,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::Id))
                    .col(integer(Orders::UserId))
                    .col(string_len_uniq(Orders::OrderNumber, 50))
                    .col(string_len(Orders::Status, 20))
                    .col(string_len(Orders::PaymentMethod, 20))
                    .col(integer(Orders::ShippingAddressId))
                    .col(decimal_len(Orders::Subtotal, 10, 2))
                    .col(decimal_len(Orders::Shipping, 10, 2))
                    .col(decimal_len(Orders::Discount, 10, 2).default("0.00"))
                    .col(decimal_len(Orders::Total, 10, 2))
                    .col(string_len_null(Orders::CouponCode, 50))
                    .col(string_len_null(Orders::Notes, 1000))
                    .col(timestamp(Orders::OrderDate))
                    .col(timestamp_null(Orders::DeliveredDate))
                    .col(
                        timestamp(Orders::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Orders::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_user_id")
                            .from(Orders::Table, Orders::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_orders_shipping_address_id")
                            .from(Orders::Table, Orders::ShippingAddressId)
                            .to(Address::Table, Address::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Orders {
    Table,
    Id,
    UserId,
    OrderNumber,
    Status,
    PaymentMethod,
    ShippingAddressId,
    Subtotal,
    Shipping,
    Discount,
    Total,
    CouponCode,
    Notes,
    OrderDate,
    DeliveredDate,
    CreatedAt,
    UpdatedAt,
}
