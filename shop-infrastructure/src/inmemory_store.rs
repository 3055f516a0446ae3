use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shop_domain::entity::Entity;
use shop_domain::error::{DomainError, DomainResult};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// 基于 DashMap 的实体存储
/// - 以实体 ID 的字符串形式为键
/// - 每个条目携带写入序号，`all` 按首次写入顺序返回
pub struct InMemoryStore<E> {
    entries: DashMap<String, (u64, E)>,
    seq: AtomicU64,
    not_found: &'static str,
}

impl<E> InMemoryStore<E>
where
    E: Entity + Clone,
{
    /// `not_found`：未命中时的错误消息，如 `"Customer not found"`
    pub fn new(not_found: &'static str) -> Self {
        Self {
            entries: DashMap::new(),
            seq: AtomicU64::new(0),
            not_found,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn insert(&self, entity: &E) -> DomainResult<()> {
        let id = entity.id().to_string();
        match self.entries.entry(id) {
            Entry::Occupied(e) => Err(DomainError::repository(format!(
                "duplicate id: {}",
                e.key()
            ))),
            Entry::Vacant(v) => {
                let seq = self.seq.fetch_add(1, Ordering::Relaxed);
                trace!(id = %v.key(), seq, "insert");
                v.insert((seq, entity.clone()));
                Ok(())
            }
        }
    }

    pub fn replace(&self, entity: &E) -> DomainResult<()> {
        let id = entity.id().to_string();
        let Some(mut slot) = self.entries.get_mut(&id) else {
            return Err(DomainError::not_found(self.not_found));
        };
        trace!(id = %id, "replace");
        slot.1 = entity.clone();
        Ok(())
    }

    pub fn get(&self, id: &str) -> DomainResult<E> {
        self.entries
            .get(id)
            .map(|slot| slot.1.clone())
            .ok_or_else(|| DomainError::not_found(self.not_found))
    }

    pub fn all(&self) -> Vec<E> {
        let mut rows: Vec<(u64, E)> = self
            .entries
            .iter()
            .map(|slot| (slot.0, slot.1.clone()))
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        rows.into_iter().map(|(_, e)| e).collect()
    }
}
