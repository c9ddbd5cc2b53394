pub use super::address::Entity as Address;
pub use super::coupon::Entity as Coupon;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::order_refund::Entity as OrderRefund;
pub use super::order_status_history::Entity as OrderStatusHistory;
pub use super::product::Entity as Product;
pub use super::user::Entity as User;
