//! 实体（Entity）基础抽象
//!
//! 为聚合与实体提供统一的标识与自校验能力。
//!
use crate::notification::Notification;
use std::fmt::Display;

/// 具备唯一标识、可自校验的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型
    type Id: Clone + Display + PartialEq;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;

    /// 收集当前状态下的全部校验失败（不中断）
    fn validate(&self) -> Notification;
}
