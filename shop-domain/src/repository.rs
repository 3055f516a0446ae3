//! 仓储（Repository）协议
//!
//! 以实体为单位的持久化抽象，具体存储由基础设施层实现。
//!
use crate::entity::Entity;
use crate::error::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity,
{
    async fn create(&self, entity: &E) -> DomainResult<()>;

    async fn update(&self, entity: &E) -> DomainResult<()>;

    /// 不存在时返回 `DomainError::NotFound`
    async fn find(&self, id: &str) -> DomainResult<E>;

    /// 按写入顺序返回全部实体
    async fn find_all(&self) -> DomainResult<Vec<E>>;
}
