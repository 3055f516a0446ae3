//! 事件子系统（eventing）
//!
//! 进程内、同步的领域事件发布/订阅：
//! - `EventHandler`：消费某一类事件的处理器；
//! - `EventDispatcher`：事件名称到处理器序列的注册表，负责同步扇出通知。
//!
//! 不涉及跨进程消息、事件持久化与重试。
//!
pub mod dispatcher;
pub mod handler;

pub use dispatcher::{EventDispatcher, RegisteredHandler};
pub use handler::EventHandler;
