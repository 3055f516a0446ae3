use super::dto::{ListProductsInput, ListProductsOutput, ProductDto};
use crate::{error::AppError, usecase::UseCase};
use async_trait::async_trait;
use shop_domain::product::ProductRepository;
use std::sync::Arc;

pub struct ListProductsUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl ListProductsUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ListProductsUseCase {
    type Input = ListProductsInput;
    type Output = ListProductsOutput;

    async fn execute(&self, _input: ListProductsInput) -> Result<ListProductsOutput, AppError> {
        let products = self.repository.find_all().await?;
        Ok(ListProductsOutput {
            products: products.iter().map(ProductDto::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_domain::product::{ProductFactory, ProductType};
    use shop_domain::repository::Repository;
    use shop_infrastructure::InMemoryProductRepository;

    #[tokio::test]
    async fn list_products() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let p1 = ProductFactory::create(ProductType::A, "Product 1", 100.0).unwrap();
        let p2 = ProductFactory::create(ProductType::B, "Product 2", 200.0).unwrap();
        repo.create(&p1).await.unwrap();
        repo.create(&p2).await.unwrap();

        let output = ListProductsUseCase::new(repo)
            .execute(ListProductsInput::default())
            .await
            .unwrap();

        assert_eq!(
            output.products,
            vec![ProductDto::from(&p1), ProductDto::from(&p2)]
        );
        assert_eq!(output.products[1].price, 400.0);
    }
}
