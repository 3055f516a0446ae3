//! 事件处理器（EventHandler）
//!
//! 定义消费某一类事件的处理逻辑与元信息（名称、订阅的事件类型）。
//!
use crate::domain_event::DomainEvent;

/// 事件处理器：同步处理某一类型的事件
///
/// 处理器在调用方线程上执行，应快速返回；返回的错误会中断本次分发。
pub trait EventHandler: Send + Sync + 'static {
    /// 该处理器消费的事件类型
    type Event: DomainEvent;

    /// 处理器名称（用于日志与错误定位）
    fn handler_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// 处理事件
    fn handle(&self, event: &Self::Event) -> anyhow::Result<()>;
}
