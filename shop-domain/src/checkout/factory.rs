use super::order::Order;
use super::order_item::OrderItem;
use crate::error::DomainResult;
use bon::Builder;

/// 订单项构造参数
#[derive(Builder, Debug, Clone)]
pub struct OrderItemProps {
    #[builder(into)]
    id: String,
    #[builder(into)]
    name: String,
    #[builder(into)]
    product_id: String,
    quantity: u32,
    price: f64,
}

/// 订单构造参数
#[derive(Builder, Debug, Clone)]
pub struct OrderProps {
    #[builder(into)]
    id: String,
    #[builder(into)]
    customer_id: String,
    #[builder(default)]
    items: Vec<OrderItemProps>,
}

/// 订单工厂
pub struct OrderFactory;

impl OrderFactory {
    pub fn create(props: OrderProps) -> DomainResult<Order> {
        let items = props
            .items
            .into_iter()
            .map(|item| {
                OrderItem::new(item.id, item.name, item.price, item.product_id, item.quantity)
            })
            .collect();
        Order::new(props.id, props.customer_id, items)
    }
}
