use crate::{
    data::{order_refund::OrderRefundRepository, order_status_history::OrderStatusHistoryRepository},
    error::{order::OrderError, AppError},
    model::order::OrderFilter,
    service::order::OrderService,
};
use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod get_timeline;
mod process_refund;
