//! # 内存存储

use crate::{
    domain::{Entity, PartnerStore},
    errors::PromoError,
    partner::Partner,
};
use ahash::AHashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// 内存存储结构
#[derive(Clone, Default)]
pub struct MemoryStore {
    partners: Arc<RwLock<AHashMap<Uuid, Partner>>>,
}

impl MemoryStore {
    /// 构造函数
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入合作伙伴，已存在时覆盖
    pub async fn insert(&self, partner: Partner) {
        debug!(id = %partner.id(), "写入合作伙伴");
        self.partners.write().await.insert(partner.id(), partner);
    }
}

impl PartnerStore for MemoryStore {
    async fn fetch_by_id(&self, id: Uuid) -> Result<Partner, PromoError> {
        self.partners
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(PromoError::PartnerNotFound(id))
    }

    async fn fetch_all(&self) -> Result<Vec<Partner>, PromoError> {
        let mut partners: Vec<Partner> = self.partners.read().await.values().cloned().collect();
        partners.sort_by(|a, b| a.name.cmp(&b.name).then(a.id().cmp(&b.id())));
        Ok(partners)
    }

    async fn persist(&self, partner: &Partner) -> Result<(), PromoError> {
        let mut partners = self.partners.write().await;
        match partners.get_mut(&partner.id()) {
            Some(current) => {
                *current = partner.clone();
                debug!(id = %partner.id(), "持久化合作伙伴");
                Ok(())
            }
            None => Err(PromoError::PartnerNotFound(partner.id())),
        }
    }
}
