use crate::{dto::Dto, error::AppError};
use async_trait::async_trait;

/// 应用层用例
///
/// 一个用例对应一次完整的业务操作：读取/构造实体、调用领域行为、
/// 经仓储持久化，并在成功后通知相关领域事件。
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send + 'static;
    type Output: Dto;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, AppError>;
}

/// 校验必填的标识字段
pub(crate) fn require_id(id: &str) -> Result<(), AppError> {
    if id.trim().is_empty() {
        return Err(AppError::Validation("id is required".into()));
    }
    Ok(())
}
