//! 领域层统一错误定义
//!
//! 聚焦实体校验、事件分发、仓储与领域规则等最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use crate::notification::Notification;
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 校验 ---
    /// 实体/值对象校验失败，Display 即为通知中累积的全部消息
    #[error("{0}")]
    Notification(Notification),
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // --- 事件系统 ---
    #[error("event handler error: handler={handler}, event={event}, reason={reason}")]
    EventHandler {
        handler: String,
        event: String,
        reason: String,
    },
    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch { expected: String, found: String },

    // --- 仓储 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },

    // --- 领域规则 ---
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
}

impl DomainError {
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn repository(reason: impl Into<String>) -> Self {
        Self::Repository {
            reason: reason.into(),
        }
    }
}

impl From<Notification> for DomainError {
    fn from(notification: Notification) -> Self {
        Self::Notification(notification)
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
