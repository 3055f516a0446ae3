use shop_application::customer::{
    AddressDto, CreateCustomerInput, CreateCustomerUseCase, ListCustomersInput,
    ListCustomersUseCase, UpdateCustomerInput, UpdateCustomerUseCase,
};
use shop_application::product::{
    CreateProductInput, CreateProductUseCase, ListProductsInput, ListProductsUseCase,
};
use shop_application::{BootstrapConfig, UseCase, build_dispatcher};
use shop_domain::checkout::{OrderItem, OrderService};
use shop_domain::customer::CustomerRepository;
use shop_domain::product::{ProductRepository, ProductType};
use shop_domain::repository::Repository;
use shop_infrastructure::{
    InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// 用法：`demo [config.json]`
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => BootstrapConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => BootstrapConfig::builder()
            .product_created_email("catalog@example.com")
            .build(),
    };
    let events = Arc::new(build_dispatcher(&config)?);

    let customers: Arc<dyn CustomerRepository> = Arc::new(InMemoryCustomerRepository::new());
    let products: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
    let orders = InMemoryOrderRepository::new();

    // 客户：创建 -> 搬家
    let customer = CreateCustomerUseCase::new(customers.clone(), events.clone())
        .execute(
            CreateCustomerInput::builder()
                .name("Customer 1")
                .address(AddressDto {
                    street: "Street 1".into(),
                    number: 123,
                    zip: "13330-250".into(),
                    city: "São Paulo".into(),
                })
                .build(),
        )
        .await?;
    UpdateCustomerUseCase::new(customers.clone(), events.clone())
        .execute(
            UpdateCustomerInput::builder()
                .id(customer.id.clone())
                .name(customer.name.clone())
                .address(AddressDto {
                    street: "Street 2".into(),
                    number: 456,
                    zip: "13330-251".into(),
                    city: "Campinas".into(),
                })
                .build(),
        )
        .await?;

    // 商品
    let create_product = CreateProductUseCase::new(products.clone(), events.clone());
    let mut items = Vec::new();
    for (i, (kind, name, price)) in [
        (ProductType::A, "Product A", 10.0),
        (ProductType::B, "Product B", 15.0),
    ]
    .into_iter()
    .enumerate()
    {
        let product = create_product
            .execute(
                CreateProductInput::builder()
                    .kind(kind)
                    .name(name)
                    .price(price)
                    .build(),
            )
            .await?;
        items.push(OrderItem::new(
            format!("item-{i}"),
            product.name,
            product.price,
            product.id,
            2,
        ));
    }

    // 下单
    let mut buyer = customers.find(&customer.id).await?;
    let order = OrderService::place_order(&mut buyer, items)?;
    orders.create(&order).await?;
    customers.update(&buyer).await?;
    info!(
        total = order.total(),
        reward_points = buyer.reward_points(),
        "order placed"
    );

    let all_customers = ListCustomersUseCase::new(customers)
        .execute(ListCustomersInput::default())
        .await?;
    let all_products = ListProductsUseCase::new(products)
        .execute(ListProductsInput::default())
        .await?;
    println!("{}", serde_json::to_string_pretty(&all_customers)?);
    println!("{}", serde_json::to_string_pretty(&all_products)?);

    drop(create_product);
    match Arc::try_unwrap(events) {
        Ok(mut dispatcher) => dispatcher.unregister_all(),
        Err(_) => warn!("event dispatcher still shared at shutdown"),
    }
    Ok(())
}
