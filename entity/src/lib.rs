pub mod prelude;

pub mod address;
pub mod coupon;
pub mod order;
pub mod order_item;
pub mod order_refund;
pub mod order_status_history;
pub mod product;
pub mod sea_orm_active_enums;
pub mod user;
