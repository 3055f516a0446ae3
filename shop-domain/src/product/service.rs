use super::entity::Product;
use crate::error::DomainResult;

/// 商品领域服务
pub struct ProductService;

impl ProductService {
    /// 按百分比批量调价：`price * percentage / 100 + price`
    pub fn increase_price(products: &mut [Product], percentage: f64) -> DomainResult<()> {
        for product in products.iter_mut() {
            let price = product.price() * percentage / 100.0 + product.price();
            product.change_price(price)?;
        }
        Ok(())
    }
}
