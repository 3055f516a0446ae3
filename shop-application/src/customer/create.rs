use super::dto::{CreateCustomerInput, CustomerDto};
use crate::{error::AppError, usecase::UseCase};
use async_trait::async_trait;
use shop_domain::customer::{
    Address, CustomerCreatedEvent, CustomerEventData, CustomerFactory, CustomerRepository,
};
use shop_domain::entity::Entity;
use shop_domain::eventing::EventDispatcher;
use std::sync::Arc;
use tracing::info;

/// 创建客户；先通知 `CustomerCreatedEvent`，处理器全部成功后才持久化
pub struct CreateCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
    events: Arc<EventDispatcher>,
}

impl CreateCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>, events: Arc<EventDispatcher>) -> Self {
        Self { repository, events }
    }
}

#[async_trait]
impl UseCase for CreateCustomerUseCase {
    type Input = CreateCustomerInput;
    type Output = CustomerDto;

    async fn execute(&self, input: CreateCustomerInput) -> Result<CustomerDto, AppError> {
        let address: Address = input.address.try_into()?;
        let customer = CustomerFactory::create_with_address(input.name, address)?;

        self.events
            .notify(&CustomerCreatedEvent::new(CustomerEventData::from(&customer)))?;

        self.repository.create(&customer).await?;
        info!(customer_id = %customer.id(), "customer created");
        Ok(CustomerDto::from(&customer))
    }
}
