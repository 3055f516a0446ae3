use super::dto::{CustomerDto, ListCustomersInput, ListCustomersOutput};
use crate::{error::AppError, usecase::UseCase};
use async_trait::async_trait;
use shop_domain::customer::CustomerRepository;
use std::sync::Arc;

pub struct ListCustomersUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl ListCustomersUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UseCase for ListCustomersUseCase {
    type Input = ListCustomersInput;
    type Output = ListCustomersOutput;

    async fn execute(&self, _input: ListCustomersInput) -> Result<ListCustomersOutput, AppError> {
        let customers = self.repository.find_all().await?;
        Ok(ListCustomersOutput {
            customers: customers.iter().map(CustomerDto::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::test_support::address;
    use shop_domain::customer::{Address, CustomerFactory};
    use shop_domain::repository::Repository;
    use shop_infrastructure::InMemoryCustomerRepository;

    #[tokio::test]
    async fn list_customers() {
        let repo = Arc::new(InMemoryCustomerRepository::new());
        let c1 =
            CustomerFactory::create_with_address("John", Address::try_from(address(1)).unwrap())
                .unwrap();
        let c2 =
            CustomerFactory::create_with_address("Jane", Address::try_from(address(2)).unwrap())
                .unwrap();
        repo.create(&c1).await.unwrap();
        repo.create(&c2).await.unwrap();

        let output = ListCustomersUseCase::new(repo)
            .execute(ListCustomersInput::default())
            .await
            .unwrap();

        assert_eq!(output.customers.len(), 2);
        assert_eq!(output.customers[0], CustomerDto::from(&c1));
        assert_eq!(output.customers[1].name, "Jane");
        assert_eq!(output.customers[1].address, Some(address(2)));
    }

    #[tokio::test]
    async fn list_is_empty_without_customers() {
        let output = ListCustomersUseCase::new(Arc::new(InMemoryCustomerRepository::new()))
            .execute(ListCustomersInput {})
            .await
            .unwrap();
        assert!(output.customers.is_empty());
    }
}
