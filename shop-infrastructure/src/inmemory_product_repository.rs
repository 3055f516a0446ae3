use crate::inmemory_store::InMemoryStore;
use async_trait::async_trait;
use shop_domain::error::DomainResult;
use shop_domain::product::{Product, ProductRepository};
use shop_domain::repository::Repository;

/// 商品仓储的内存实现
pub struct InMemoryProductRepository {
    store: InMemoryStore<Product>,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self {
            store: InMemoryStore::new("Product not found"),
        }
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Product> for InMemoryProductRepository {
    async fn create(&self, entity: &Product) -> DomainResult<()> {
        self.store.insert(entity)
    }

    async fn update(&self, entity: &Product) -> DomainResult<()> {
        self.store.replace(entity)
    }

    async fn find(&self, id: &str) -> DomainResult<Product> {
        self.store.get(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        Ok(self.store.all())
    }
}

impl ProductRepository for InMemoryProductRepository {}
