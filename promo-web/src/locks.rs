//! 按合作伙伴串行化更新

use ahash::AHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

type LockTable = AHashMap<Uuid, Arc<AsyncMutex<()>>>;

/// 合作伙伴锁表
///
/// 读取、修改、持久化须在同一把锁内完成，否则并发请求可能读到同一个有效限额。
#[derive(Default)]
pub struct PartnerLocks {
    locks: Mutex<LockTable>,
}

impl PartnerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, LockTable> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 获取合作伙伴锁，守卫释放前同一合作伙伴的其他请求等待
    pub async fn acquire(&self, id: Uuid) -> PartnerGuard<'_> {
        let lock = Arc::clone(self.table().entry(id).or_default());
        PartnerGuard {
            locks: self,
            id,
            guard: Some(lock.lock_owned().await),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.table().len()
    }
}

/// 合作伙伴锁守卫，释放时清理无人等待的锁
pub struct PartnerGuard<'a> {
    locks: &'a PartnerLocks,
    id: Uuid,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for PartnerGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        let mut table = self.locks.table();
        // 锁表中仅剩一份引用时无人持有或等待
        if table.get(&self.id).is_some_and(|l| Arc::strong_count(l) == 1) {
            table.remove(&self.id);
        }
    }
}
