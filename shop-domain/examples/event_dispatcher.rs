//! 进程内事件分发示例
//!
//! 运行：`RUST_LOG=debug cargo run -p shop-domain --example event_dispatcher`
use anyhow::Result;
use shop_domain::customer::{
    Address, Customer, PrintConsoleLogWhenCustomerAddressHasChanged,
    PrintConsoleLogWhenCustomerCreated, PrintOtherConsoleLogWhenCustomerCreated,
};
use shop_domain::eventing::EventDispatcher;
use shop_domain::product::{Product, SendEmailWhenProductIsCreatedHandler};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut dispatcher = EventDispatcher::new();
    let email = Arc::new(SendEmailWhenProductIsCreatedHandler::new("catalog@example.com"));
    dispatcher.subscribe(email.clone())?;
    dispatcher.subscribe(Arc::new(PrintConsoleLogWhenCustomerCreated))?;
    dispatcher.subscribe(Arc::new(PrintOtherConsoleLogWhenCustomerCreated))?;
    dispatcher.subscribe(Arc::new(PrintConsoleLogWhenCustomerAddressHasChanged))?;
    println!("{dispatcher:?}");

    Product::create("p1", "Product 1", 10.0, &dispatcher)?;

    let mut customer = Customer::create("c1", "Customer 1", &dispatcher)?;
    let address = Address::new("Street 1", 123, "13330-250", "São Paulo")?;
    customer.relocate(address, &dispatcher)?;

    // 注销后不再收到通知，但名称仍保留为空序列
    dispatcher.unregister("ProductCreatedEvent", &email);
    Product::create("p2", "Product 2", 20.0, &dispatcher)?;
    assert_eq!(dispatcher.handlers_for("ProductCreatedEvent").map(<[_]>::len), Some(0));

    dispatcher.unregister_all();
    assert!(dispatcher.event_handlers().is_empty());
    Ok(())
}
