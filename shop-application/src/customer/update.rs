use super::dto::{CustomerDto, UpdateCustomerInput};
use crate::{error::AppError, usecase::UseCase, usecase::require_id};
use async_trait::async_trait;
use shop_domain::customer::{Address, CustomerRepository};
use shop_domain::eventing::EventDispatcher;
use std::sync::Arc;
use tracing::info;

/// 更新客户名称并搬迁地址（通知 `CustomerAddressChanged`）；处理器失败时不持久化
pub struct UpdateCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
    events: Arc<EventDispatcher>,
}

impl UpdateCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>, events: Arc<EventDispatcher>) -> Self {
        Self { repository, events }
    }
}

#[async_trait]
impl UseCase for UpdateCustomerUseCase {
    type Input = UpdateCustomerInput;
    type Output = CustomerDto;

    async fn execute(&self, input: UpdateCustomerInput) -> Result<CustomerDto, AppError> {
        require_id(&input.id)?;
        let mut customer = self.repository.find(&input.id).await?;

        customer.change_name(input.name)?;
        let address: Address = input.address.try_into()?;
        customer.relocate(address, &self.events)?;

        self.repository.update(&customer).await?;
        info!(customer_id = %input.id, "customer updated");
        Ok(CustomerDto::from(&customer))
    }
}
