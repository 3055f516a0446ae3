//! 领域事件（Domain Event）
//!
//! 定义事件需要实现的最小接口（`DomainEvent`）。具体事件通常借助
//! `#[domain_event]` 宏声明，由 `eventing::EventDispatcher` 按名称分发。

mod domain_event_trait;

pub use domain_event_trait::DomainEvent;
