use shop_application::customer::{
    AddressDto, CreateCustomerInput, CreateCustomerUseCase, FindCustomerInput,
    FindCustomerUseCase, ListCustomersInput, ListCustomersUseCase, UpdateCustomerInput,
    UpdateCustomerUseCase,
};
use shop_application::product::{CreateProductInput, CreateProductUseCase};
use shop_application::{BootstrapConfig, UseCase, build_dispatcher};
use shop_domain::checkout::{OrderItem, OrderService};
use shop_domain::customer::CustomerRepository;
use shop_domain::product::{ProductRepository, ProductType};
use shop_domain::repository::Repository;
use shop_infrastructure::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
use std::sync::Arc;

fn address(street: &str) -> AddressDto {
    AddressDto {
        street: street.into(),
        number: 10,
        zip: "12345-000".into(),
        city: "City".into(),
    }
}

#[tokio::test]
async fn customer_lifecycle_with_bootstrapped_dispatcher() -> anyhow::Result<()> {
    let events = Arc::new(build_dispatcher(&BootstrapConfig::default())?);
    let customers: Arc<dyn CustomerRepository> = Arc::new(InMemoryCustomerRepository::new());

    let created = CreateCustomerUseCase::new(customers.clone(), events.clone())
        .execute(
            CreateCustomerInput::builder()
                .name("Customer 1")
                .address(address("Street 1"))
                .build(),
        )
        .await?;

    UpdateCustomerUseCase::new(customers.clone(), events.clone())
        .execute(
            UpdateCustomerInput::builder()
                .id(created.id.clone())
                .name("Customer 1")
                .address(address("Street 2"))
                .build(),
        )
        .await?;

    let found = FindCustomerUseCase::new(customers.clone())
        .execute(FindCustomerInput {
            id: created.id.clone(),
        })
        .await?;
    assert_eq!(found.address, Some(address("Street 2")));

    let listed = ListCustomersUseCase::new(customers)
        .execute(ListCustomersInput::default())
        .await?;
    assert_eq!(listed.customers, vec![found]);
    Ok(())
}

#[tokio::test]
async fn place_order_for_created_products() -> anyhow::Result<()> {
    let config = BootstrapConfig::builder()
        .product_created_email("ops@example.com")
        .build();
    let events = Arc::new(build_dispatcher(&config)?);
    let products: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
    let customers = InMemoryCustomerRepository::new();
    let orders = InMemoryOrderRepository::new();

    let create_product = CreateProductUseCase::new(products.clone(), events.clone());
    let a = create_product
        .execute(
            CreateProductInput::builder()
                .kind(ProductType::A)
                .name("Product A")
                .price(10.0)
                .build(),
        )
        .await?;
    let b = create_product
        .execute(
            CreateProductInput::builder()
                .kind(ProductType::B)
                .name("Product B")
                .price(10.0)
                .build(),
        )
        .await?;

    let mut customer = shop_domain::customer::Customer::create("c1", "Customer 1", &events)?;
    customers.create(&customer).await?;

    let items = vec![
        OrderItem::new("i1", a.name.clone(), a.price, a.id.clone(), 2),
        OrderItem::new("i2", b.name.clone(), b.price, b.id.clone(), 1),
    ];
    let order = OrderService::place_order(&mut customer, items)?;
    orders.create(&order).await?;
    customers.update(&customer).await?;

    assert_eq!(order.total(), 40.0);
    assert_eq!(customers.find("c1").await?.reward_points(), 20.0);
    assert_eq!(OrderService::total(&orders.find_all().await?), 40.0);
    assert_eq!(products.find_all().await?.len(), 2);
    Ok(())
}
