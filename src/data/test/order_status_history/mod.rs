use crate::{
    data::order_status_history::OrderStatusHistoryRepository, model::order::AppendHistoryParams,
};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod append;
