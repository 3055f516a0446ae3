use super::entity::Product;
use serde::Serialize;
use shop_macros::domain_event;

/// 商品创建事件载荷
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCreatedData {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
}

impl From<&Product> for ProductCreatedData {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            description: None,
            price: product.price(),
        }
    }
}

/// 商品已创建
#[domain_event(name = "ProductCreatedEvent")]
pub struct ProductCreatedEvent {
    event_data: ProductCreatedData,
}
