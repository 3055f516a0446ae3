//! 客户聚合：实体、地址值对象、领域事件与处理器、工厂、仓储接口
//!
mod address;
mod entity;
mod event;
mod factory;
mod handler;
mod repository;

pub use address::Address;
pub use entity::Customer;
pub use event::{CustomerAddressChanged, CustomerCreatedEvent, CustomerEventData};
pub use factory::CustomerFactory;
pub use handler::{
    PrintConsoleLogWhenCustomerAddressHasChanged, PrintConsoleLogWhenCustomerCreated,
    PrintOtherConsoleLogWhenCustomerCreated,
};
pub use repository::CustomerRepository;
