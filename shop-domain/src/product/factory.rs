use super::entity::Product;
use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// 商品类型；`B` 类商品按两倍价格建档
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    A,
    B,
}

impl FromStr for ProductType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            other => Err(DomainError::invalid_value(format!(
                "Product type not supported: {other}"
            ))),
        }
    }
}

/// 商品工厂：生成 UUID v4 标识
pub struct ProductFactory;

impl ProductFactory {
    pub fn create(kind: ProductType, name: impl Into<String>, price: f64) -> DomainResult<Product> {
        let price = match kind {
            ProductType::A => price,
            ProductType::B => price * 2.0,
        };
        Product::new(Uuid::new_v4().to_string(), name, price)
    }
}
