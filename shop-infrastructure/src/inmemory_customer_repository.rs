use crate::inmemory_store::InMemoryStore;
use async_trait::async_trait;
use shop_domain::customer::{Customer, CustomerRepository};
use shop_domain::error::DomainResult;
use shop_domain::repository::Repository;

/// 客户仓储的内存实现
pub struct InMemoryCustomerRepository {
    store: InMemoryStore<Customer>,
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self {
            store: InMemoryStore::new("Customer not found"),
        }
    }
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Customer> for InMemoryCustomerRepository {
    async fn create(&self, entity: &Customer) -> DomainResult<()> {
        self.store.insert(entity)
    }

    async fn update(&self, entity: &Customer) -> DomainResult<()> {
        self.store.replace(entity)
    }

    async fn find(&self, id: &str) -> DomainResult<Customer> {
        self.store.get(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        Ok(self.store.all())
    }
}

impl CustomerRepository for InMemoryCustomerRepository {}
