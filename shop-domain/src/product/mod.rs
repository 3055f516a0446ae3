//! 商品聚合：实体、领域事件与处理器、工厂、领域服务、仓储接口
//!
mod entity;
mod event;
mod factory;
mod handler;
mod repository;
mod service;

pub use entity::Product;
pub use event::{ProductCreatedData, ProductCreatedEvent};
pub use factory::{ProductFactory, ProductType};
pub use handler::SendEmailWhenProductIsCreatedHandler;
pub use repository::ProductRepository;
pub use service::ProductService;
