use crate::dto::Dto;
use bon::Builder;
use serde::{Deserialize, Serialize};
use shop_domain::entity::Entity;
use shop_domain::product::{Product, ProductType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: f64,
}

impl Dto for ProductDto {}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().clone(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

/// 创建商品的输入；JSON 字段名为 `type`
#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductInput {
    #[serde(rename = "type")]
    pub kind: ProductType,
    #[builder(into)]
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindProductInput {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProductsInput {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListProductsOutput {
    pub products: Vec<ProductDto>,
}

impl Dto for ListProductsOutput {}

#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductInput {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub name: String,
    pub price: f64,
}
