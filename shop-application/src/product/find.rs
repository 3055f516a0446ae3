use super::dto::{FindProductInput, ProductDto};
use crate::{error::AppError, usecase::UseCase, usecase::require_id};
use async_trait::async_trait;
use shop_domain::product::ProductRepository;
use std::sync::Arc;

pub struct FindProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl FindProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for FindProductUseCase {
    type Input = FindProductInput;
    type Output = ProductDto;

    async fn execute(&self, input: FindProductInput) -> Result<ProductDto, AppError> {
        require_id(&input.id)?;
        let product = self.repository.find(&input.id).await?;
        Ok(ProductDto::from(&product))
    }
}
