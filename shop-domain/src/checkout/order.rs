use super::order_item::OrderItem;
use crate::entity::Entity;
use crate::error::DomainResult;
use crate::notification::Notification;
use serde::{Deserialize, Serialize};

const CONTEXT: &str = "order";

/// 订单聚合根
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: String,
    customer_id: String,
    items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        customer_id: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> DomainResult<Self> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };
        order.validate().into_result()?;
        Ok(order)
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(OrderItem::total).sum()
    }
}

impl Entity for Order {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn validate(&self) -> Notification {
        let mut notification = Notification::new();
        if self.id.trim().is_empty() {
            notification.add_error(CONTEXT, "Id is required");
        }
        if self.customer_id.trim().is_empty() {
            notification.add_error(CONTEXT, "CustomerId is required");
        }
        if self.items.is_empty() {
            notification.add_error(CONTEXT, "Items are required");
        }
        if self.items.iter().any(|item| item.quantity() == 0) {
            notification.add_error(CONTEXT, "Quantity must be greater than 0");
        }
        notification
    }
}
