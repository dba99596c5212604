//! 测试辅助：实体构造器与可注入故障的存储

use crate::{
    domain::PartnerStore,
    errors::PromoError,
    partner::{Partner, PartnerLimit},
    store::MemoryStore,
};
use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// 合作伙伴构造器
pub struct PartnerBuilder {
    id: Uuid,
    name: String,
    is_active: bool,
    issued_codes: i32,
    limits: Vec<PartnerLimit>,
}

impl Default for PartnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PartnerBuilder {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "测试合作伙伴".to_string(),
            is_active: true,
            issued_codes: 0,
            limits: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_issued_codes(mut self, issued_codes: i32) -> Self {
        self.issued_codes = issued_codes;
        self
    }

    /// 原样放入限额，不做有效限额唯一性检查，所属 Id 改写为本合作伙伴
    pub fn with_limit(mut self, limit: PartnerLimit) -> Self {
        self.limits.push(limit);
        self
    }

    pub fn build(self) -> Partner {
        let id = self.id;
        let mut partner =
            Partner::new(id, self.name, self.is_active).with_issued_codes(self.issued_codes);
        partner.limits = self
            .limits
            .into_iter()
            .map(|mut l| {
                l.partner_id = id;
                l
            })
            .collect();
        partner
    }
}

/// 限额构造器
pub struct LimitBuilder {
    limit: PartnerLimit,
}

impl Default for LimitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LimitBuilder {
    pub fn new() -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            limit: PartnerLimit::new(Uuid::new_v4(), 100, now, now + Duration::days(30)),
        }
    }

    pub fn with_cap(mut self, cap: i32) -> Self {
        self.limit.cap = cap;
        self
    }

    pub fn with_end_at(mut self, end_at: OffsetDateTime) -> Self {
        self.limit.end_at = end_at;
        self
    }

    pub fn with_canceled_at(mut self, canceled_at: Option<OffsetDateTime>) -> Self {
        self.limit.canceled_at = canceled_at;
        self
    }

    pub fn build(self) -> PartnerLimit {
        self.limit
    }
}

/// 可注入故障的存储
#[derive(Clone, Default)]
pub struct MockStore {
    inner: MemoryStore,
    fail_fetch: Arc<AtomicBool>,
    fail_persist: Arc<AtomicBool>,
    persisted: Arc<AtomicUsize>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_partners(partners: impl IntoIterator<Item = Partner>) -> Self {
        let store = Self::new();
        for partner in partners {
            store.inner.insert(partner).await;
        }
        store
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_persist(&self, fail: bool) {
        self.fail_persist.store(fail, Ordering::SeqCst);
    }

    /// 成功持久化的次数
    pub fn persisted(&self) -> usize {
        self.persisted.load(Ordering::SeqCst)
    }
}

impl PartnerStore for MockStore {
    async fn fetch_by_id(&self, id: Uuid) -> Result<Partner, PromoError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err("模拟读取故障".into());
        }
        self.inner.fetch_by_id(id).await
    }

    async fn fetch_all(&self) -> Result<Vec<Partner>, PromoError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err("模拟读取故障".into());
        }
        self.inner.fetch_all().await
    }

    async fn persist(&self, partner: &Partner) -> Result<(), PromoError> {
        if self.fail_persist.load(Ordering::SeqCst) {
            return Err("模拟写入故障".into());
        }
        self.inner.persist(partner).await?;
        self.persisted.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
