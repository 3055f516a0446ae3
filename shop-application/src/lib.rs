//! 应用层（shop-application）
//!
//! 以用例（`UseCase`）组织客户与商品的增删改查，输出 `Dto`；
//! 领域事件经由启动阶段装配好的 `EventDispatcher`（见 `bootstrap`）同步分发。
//!
pub mod bootstrap;
pub mod customer;
pub mod dto;
pub mod error;
pub mod product;
pub mod usecase;

pub use bootstrap::{BootstrapConfig, build_dispatcher};
pub use error::AppError;
pub use usecase::UseCase;
