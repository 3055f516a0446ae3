use super::dto::{CreateProductInput, ProductDto};
use crate::{error::AppError, usecase::UseCase};
use async_trait::async_trait;
use shop_domain::entity::Entity;
use shop_domain::eventing::EventDispatcher;
use shop_domain::product::{
    ProductCreatedData, ProductCreatedEvent, ProductFactory, ProductRepository,
};
use std::sync::Arc;
use tracing::info;

/// 按类型创建商品；先通知 `ProductCreatedEvent`，处理器全部成功后才持久化
pub struct CreateProductUseCase {
    repository: Arc<dyn ProductRepository>,
    events: Arc<EventDispatcher>,
}

impl CreateProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>, events: Arc<EventDispatcher>) -> Self {
        Self { repository, events }
    }
}

#[async_trait]
impl UseCase for CreateProductUseCase {
    type Input = CreateProductInput;
    type Output = ProductDto;

    async fn execute(&self, input: CreateProductInput) -> Result<ProductDto, AppError> {
        let product = ProductFactory::create(input.kind, input.name, input.price)?;

        self.events
            .notify(&ProductCreatedEvent::new(ProductCreatedData::from(&product)))?;

        self.repository.create(&product).await?;
        info!(product_id = %product.id(), kind = ?input.kind, "product created");
        Ok(ProductDto::from(&product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_domain::domain_event::DomainEvent;
    use shop_domain::eventing::EventHandler;
    use shop_domain::product::ProductType;
    use shop_domain::repository::Repository;
    use shop_infrastructure::InMemoryProductRepository;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<ProductCreatedData>>);

    impl EventHandler for Collect {
        type Event = ProductCreatedEvent;

        fn handle(&self, event: &ProductCreatedEvent) -> anyhow::Result<()> {
            self.0.lock().unwrap().push(event.event_data().clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn create_a_product() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let collect = Arc::new(Collect::default());
        let mut events = EventDispatcher::new();
        events.subscribe(collect.clone()).unwrap();
        let usecase = CreateProductUseCase::new(repo.clone(), Arc::new(events));

        let output = usecase
            .execute(
                CreateProductInput::builder()
                    .kind(ProductType::A)
                    .name("Product A")
                    .price(100.0)
                    .build(),
            )
            .await
            .unwrap();

        assert!(!output.id.is_empty());
        assert_eq!(output.name, "Product A");
        assert_eq!(output.price, 100.0);
        assert_eq!(repo.find(&output.id).await.unwrap().price(), 100.0);

        let seen = collect.0.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name, "Product A");
        assert_eq!(seen[0].description, None);
    }

    #[tokio::test]
    async fn type_b_doubles_price() {
        let usecase = CreateProductUseCase::new(
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(EventDispatcher::new()),
        );

        let output = usecase
            .execute(
                CreateProductInput::builder()
                    .kind(ProductType::B)
                    .name("Product B")
                    .price(100.0)
                    .build(),
            )
            .await
            .unwrap();
        assert_eq!(output.price, 200.0);
    }

    struct SmtpDown;

    impl EventHandler for SmtpDown {
        type Event = ProductCreatedEvent;

        fn handle(&self, _event: &ProductCreatedEvent) -> anyhow::Result<()> {
            anyhow::bail!("smtp unavailable")
        }
    }

    #[tokio::test]
    async fn handler_failure_stores_nothing() {
        let repo = Arc::new(InMemoryProductRepository::new());
        let mut events = EventDispatcher::new();
        events.subscribe(Arc::new(SmtpDown)).unwrap();
        let usecase = CreateProductUseCase::new(repo.clone(), Arc::new(events));

        let err = usecase
            .execute(
                CreateProductInput::builder()
                    .kind(ProductType::A)
                    .name("Product A")
                    .price(100.0)
                    .build(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(shop_domain::error::DomainError::EventHandler { .. })
        ));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let collect = Arc::new(Collect::default());
        let mut events = EventDispatcher::new();
        events.subscribe(collect.clone()).unwrap();
        let usecase =
            CreateProductUseCase::new(Arc::new(InMemoryProductRepository::new()), Arc::new(events));

        let err = usecase
            .execute(
                CreateProductInput::builder()
                    .kind(ProductType::A)
                    .name("Product A")
                    .price(-1.0)
                    .build(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "domain: product: Price must be greater than zero");
        assert!(collect.0.lock().unwrap().is_empty());
    }
}
