use super::order::Order;
use crate::repository::Repository;

/// 订单仓储；`update` 以新订单项整体替换旧订单项
pub trait OrderRepository: Repository<Order> {}
