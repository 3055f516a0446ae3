use super::event::{ProductCreatedData, ProductCreatedEvent};
use crate::entity::Entity;
use crate::error::DomainResult;
use crate::eventing::EventDispatcher;
use crate::notification::Notification;
use serde::{Deserialize, Serialize};

const CONTEXT: &str = "product";

/// 商品聚合根
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> DomainResult<Self> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate().into_result()?;
        Ok(product)
    }

    /// 创建商品并通知 `ProductCreatedEvent`
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        events: &EventDispatcher,
    ) -> DomainResult<Self> {
        let product = Self::new(id, name, price)?;
        events.notify(&ProductCreatedEvent::new(ProductCreatedData::from(&product)))?;
        Ok(product)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// 修改名称；校验失败时保持原值
    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.name, name.into());
        self.validate().into_result().inspect_err(|_| {
            self.name = previous;
        })
    }

    /// 修改价格；校验失败时保持原值
    pub fn change_price(&mut self, price: f64) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.price, price);
        self.validate().into_result().inspect_err(|_| {
            self.price = previous;
        })
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn validate(&self) -> Notification {
        let mut notification = Notification::new();
        if self.id.trim().is_empty() {
            notification.add_error(CONTEXT, "Id is required");
        }
        if self.name.trim().is_empty() {
            notification.add_error(CONTEXT, "Name is required");
        }
        if self.price < 0.0 {
            notification.add_error(CONTEXT, "Price must be greater than zero");
        }
        notification
    }
}
