use crate::{data::order_refund::OrderRefundRepository, model::order::CreateRefundParams};
use entity::sea_orm_active_enums::{OrderStatus, RefundStatus};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_order_id;
