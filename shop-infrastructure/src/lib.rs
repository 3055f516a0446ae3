//! 基础设施层：仓储的进程内实现
//!
pub mod inmemory_customer_repository;
pub mod inmemory_order_repository;
pub mod inmemory_product_repository;
pub mod inmemory_store;

pub use inmemory_customer_repository::InMemoryCustomerRepository;
pub use inmemory_order_repository::InMemoryOrderRepository;
pub use inmemory_product_repository::InMemoryProductRepository;
pub use inmemory_store::InMemoryStore;
