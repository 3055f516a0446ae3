//! 校验通知（Notification）
//!
//! 实体在构造与变更时收集全部校验失败，而不是在第一个错误处中断；
//! 渲染结果形如 `product: Id is required,product: Name is required`。
//!
use crate::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 单条校验失败
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub context: String,
    pub message: String,
}

/// 校验失败收集器
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    errors: Vec<NotificationItem>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.errors.push(NotificationItem {
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[NotificationItem] {
        &self.errors
    }

    /// 渲染消息；给定 `context` 时仅输出该上下文的错误
    pub fn messages(&self, context: Option<&str>) -> String {
        self.errors
            .iter()
            .filter(|e| context.is_none_or(|c| e.context == c))
            .map(|e| format!("{}: {}", e.context, e.message))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// 有错误时转换为 `DomainError::Notification`
    pub fn into_result(self) -> DomainResult<()> {
        if self.has_errors() {
            Err(DomainError::Notification(self))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages(None))
    }
}
