use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coupon::Table)
                    .if_not_exists()
                    .col(pk_auto(Coupon::Id))
                    .col(string_len_uniq(Coupon::Code, 50))
                    .col(string_len(Coupon::CouponType, 20))
                    .col(decimal_len(Coupon::Value, 10, 2))
                    .col(decimal_len(Coupon::MinPurchase, 10, 2).default("0.00"))
                    .col(decimal_len_null(Coupon::MaxDiscount, 10, 2))
                    .col(integer(Coupon::UsageLimit))
                    .col(integer(Coupon::UsageCount).default(0))
                    .col(timestamp(Coupon::ExpiresAt))
                    .col(boolean(Coupon::IsActive).default(true))
                    .col(
                        timestamp(Coupon::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Coupon::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coupon::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Coupon {
    Table,
    Id,
    Code,
    CouponType,
    Value,
    MinPurchase,
    MaxDiscount,
    UsageLimit,
    UsageCount,
    ExpiresAt,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
