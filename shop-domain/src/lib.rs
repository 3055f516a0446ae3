//! 电商领域层（shop-domain）
//!
//! 以 DDD 为中心组织客户、商品与下单（checkout）的领域模型：
//! - 实体（`entity`）与值对象（`value_object`），借助 `notification` 汇总校验失败；
//! - 领域事件（`domain_event`）与进程内同步事件分发（`eventing`）；
//! - 各聚合的工厂、领域服务与仓储接口（`customer` / `product` / `checkout`）。
//!
//! 典型用法：
//! 1. 启动时创建 `EventDispatcher` 并注册处理器；
//! 2. 通过 `Customer::create` / `Product::create` 等生产者方法完成状态变更并通知事件；
//! 3. 由基础设施层实现 `Repository` 完成持久化。
//!
pub mod checkout;
pub mod customer;
pub mod domain_event;
pub mod entity;
pub mod error;
pub mod eventing;
pub mod notification;
pub mod product;
pub mod repository;
pub mod value_object;

// 允许在本 crate 内部通过 ::shop_domain 进行自引用，
// 以便过程宏在本 crate 中也能解析到 ::shop_domain 路径。
extern crate self as shop_domain;
