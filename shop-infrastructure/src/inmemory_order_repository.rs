use crate::inmemory_store::InMemoryStore;
use async_trait::async_trait;
use shop_domain::checkout::{Order, OrderRepository};
use shop_domain::error::DomainResult;
use shop_domain::repository::Repository;

/// 订单仓储的内存实现；`update` 以新的明细整体替换
pub struct InMemoryOrderRepository {
    store: InMemoryStore<Order>,
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self {
            store: InMemoryStore::new("Order not found"),
        }
    }
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Order> for InMemoryOrderRepository {
    async fn create(&self, entity: &Order) -> DomainResult<()> {
        self.store.insert(entity)
    }

    async fn update(&self, entity: &Order) -> DomainResult<()> {
        self.store.replace(entity)
    }

    async fn find(&self, id: &str) -> DomainResult<Order> {
        self.store.get(id)
    }

    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        Ok(self.store.all())
    }
}

impl OrderRepository for InMemoryOrderRepository {}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_domain::checkout::OrderItem;
    use shop_domain::error::DomainError;

    fn item(id: &str, quantity: u32) -> OrderItem {
        OrderItem::new(id, "Product 1", 10.0, "p1", quantity)
    }

    #[tokio::test]
    async fn create_and_find_order() {
        let repo = InMemoryOrderRepository::new();
        let order = Order::new("123", "c1", vec![item("1", 2)]).unwrap();

        repo.create(&order).await.unwrap();

        let found = repo.find("123").await.unwrap();
        assert_eq!(found, order);
        assert_eq!(found.total(), 20.0);
    }

    #[tokio::test]
    async fn update_replaces_items() {
        let repo = InMemoryOrderRepository::new();
        let order = Order::new("123", "c1", vec![item("1", 2)]).unwrap();
        repo.create(&order).await.unwrap();

        let changed = Order::new("123", "c1", vec![item("1", 1), item("2", 3)]).unwrap();
        repo.update(&changed).await.unwrap();

        let found = repo.find("123").await.unwrap();
        assert_eq!(found.items().len(), 2);
        assert_eq!(found.total(), 40.0);
    }

    #[tokio::test]
    async fn update_missing_order() {
        let repo = InMemoryOrderRepository::new();
        let order = Order::new("123", "c1", vec![item("1", 1)]).unwrap();

        let err = repo.update(&order).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Order not found"));
    }
}
