use super::dto::{CustomerDto, FindCustomerInput};
use crate::{error::AppError, usecase::UseCase, usecase::require_id};
use async_trait::async_trait;
use shop_domain::customer::CustomerRepository;
use std::sync::Arc;

pub struct FindCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl FindCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for FindCustomerUseCase {
    type Input = FindCustomerInput;
    type Output = CustomerDto;

    async fn execute(&self, input: FindCustomerInput) -> Result<CustomerDto, AppError> {
        require_id(&input.id)?;
        let customer = self.repository.find(&input.id).await?;
        Ok(CustomerDto::from(&customer))
    }
}
