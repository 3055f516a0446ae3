use super::dto::{ProductDto, UpdateProductInput};
use crate::{error::AppError, usecase::UseCase, usecase::require_id};
use async_trait::async_trait;
use shop_domain::product::ProductRepository;
use std::sync::Arc;

pub struct UpdateProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl UpdateProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for UpdateProductUseCase {
    type Input = UpdateProductInput;
    type Output = ProductDto;

    async fn execute(&self, input: UpdateProductInput) -> Result<ProductDto, AppError> {
        require_id(&input.id)?;
        let mut product = self.repository.find(&input.id).await?;

        product.change_name(input.name)?;
        product.change_price(input.price)?;
        self.repository.update(&product).await?;

        Ok(ProductDto::from(&product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_domain::product::Product;
    use shop_domain::repository::Repository;
    use shop_infrastructure::InMemoryProductRepository;

    #[tokio::test]
    async fn update_a_product() {
        let repo = Arc::new(InMemoryProductRepository::new());
        repo.create(&Product::new("123", "Product 1", 30.0).unwrap())
            .await
            .unwrap();
        let usecase = UpdateProductUseCase::new(repo.clone());

        let output = usecase
            .execute(
                UpdateProductInput::builder()
                    .id("123")
                    .name("Product Updated")
                    .price(50.0)
                    .build(),
            )
            .await
            .unwrap();

        assert_eq!(output.name, "Product Updated");
        assert_eq!(output.price, 50.0);
        assert_eq!(ProductDto::from(&repo.find("123").await.unwrap()), output);
    }

    #[tokio::test]
    async fn update_missing_product() {
        let err = UpdateProductUseCase::new(Arc::new(InMemoryProductRepository::new()))
            .execute(
                UpdateProductInput::builder()
                    .id("404")
                    .name("Nope")
                    .price(1.0)
                    .build(),
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
