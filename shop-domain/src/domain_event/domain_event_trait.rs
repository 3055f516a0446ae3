use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// 领域事件：具名、带发生时间与载荷的不可变值
///
/// 事件在聚合完成状态变更后创建，分发后即丢弃，不做持久化。
pub trait DomainEvent: fmt::Debug + Send + Sync + 'static {
    /// 事件名称，同时作为分发器的查找键（如 `ProductCreatedEvent`）
    const NAME: &'static str;

    /// 事件载荷，由产生事件的聚合自行定义
    type Data: fmt::Debug + Serialize + Send + Sync;

    fn event_name(&self) -> &str {
        Self::NAME
    }

    /// 事件发生时间
    fn occurred_at(&self) -> &DateTime<Utc>;

    /// 事件载荷
    fn event_data(&self) -> &Self::Data;
}
