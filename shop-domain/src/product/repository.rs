use super::entity::Product;
use crate::repository::Repository;

/// 商品仓储；`find` 未命中时返回 `NotFound("Product not found")`
pub trait ProductRepository: Repository<Product> {}
