//! 下单（checkout）：订单聚合、订单项、工厂、领域服务与仓储接口
//!
mod factory;
mod order;
mod order_item;
mod repository;
mod service;

pub use factory::{OrderFactory, OrderItemProps, OrderProps};
pub use order::Order;
pub use order_item::OrderItem;
pub use repository::OrderRepository;
pub use service::OrderService;
