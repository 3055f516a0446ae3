use super::order::Order;
use super::order_item::OrderItem;
use crate::customer::Customer;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use uuid::Uuid;

/// 订单领域服务
pub struct OrderService;

impl OrderService {
    /// 为客户下单，客户获得订单总额一半的积分
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> DomainResult<Order> {
        if items.is_empty() {
            return Err(DomainError::invalid_value(
                "Order must have at least one item",
            ));
        }

        let order = Order::new(Uuid::new_v4().to_string(), customer.id().clone(), items)?;
        customer.add_reward_points(order.total() / 2.0);
        Ok(order)
    }

    pub fn total(orders: &[Order]) -> f64 {
        orders.iter().map(Order::total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_order_grants_reward_points() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let item = OrderItem::new("i1", "Item 1", 10.0, "p1", 1);

        let order = OrderService::place_order(&mut customer, vec![item]).unwrap();

        assert_eq!(customer.reward_points(), 5.0);
        assert_eq!(order.total(), 10.0);
        assert_eq!(order.customer_id(), "c1");
    }

    #[test]
    fn place_order_requires_items() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let err = OrderService::place_order(&mut customer, vec![]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value: Order must have at least one item");
        assert_eq!(customer.reward_points(), 0.0);
    }

    #[test]
    fn total_of_all_orders() {
        let item1 = OrderItem::new("i1", "Item 1", 100.0, "p1", 1);
        let item2 = OrderItem::new("i2", "Item 2", 200.0, "p2", 2);
        let order1 = Order::new("o1", "c1", vec![item1]).unwrap();
        let order2 = Order::new("o2", "c1", vec![item2]).unwrap();

        assert_eq!(OrderService::total(&[order1, order2]), 500.0);
    }
}
