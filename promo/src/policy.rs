//! # 限额策略
//!
//! 设置限额的调用顺序：
//!
//! 1. [`LimitPolicy::eligible_partner`] 获取合作伙伴并检查激活状态；
//! 2. [`LimitPolicy::deactivate_current_limit`] 撤销当前限额并清零计数；
//! 3. [`LimitPolicy::build_limit`] 校验并构造新限额；
//! 4. 调用方追加新限额，再通过存储整体持久化合作伙伴。
//!
//! 同一合作伙伴的并发更新须由调用方串行化，策略本身不加锁。

use crate::{
    domain::{Entity, PartnerStore},
    errors::PromoError,
    partner::{Partner, PartnerLimit},
};
use time::OffsetDateTime;
use uuid::Uuid;

/// 限额策略结构
pub struct LimitPolicy<S: PartnerStore> {
    store: S,
}

impl<S: PartnerStore> LimitPolicy<S> {
    /// 构造函数
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 底层存储
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 获取可操作限额的合作伙伴
    pub async fn eligible_partner(&self, id: Uuid) -> Result<Partner, PromoError> {
        let partner = self.store.fetch_by_id(id).await?;
        if !partner.is_active {
            return Err(PromoError::InactivePartner);
        }

        Ok(partner)
    }

    /// 撤销当前有效限额
    ///
    /// 计数只针对当前限额，因此撤销时清零；没有有效限额时计数保持不变。
    pub fn deactivate_current_limit(&self, partner: &mut Partner) {
        if let Some(limit) = partner.active_limit_mut() {
            limit.cancel(OffsetDateTime::now_utc());
            partner.issued_codes = 0;
        }
    }

    /// 校验请求并构造新限额，不追加也不持久化
    pub fn build_limit(
        &self,
        partner: &Partner,
        cap: i32,
        end_at: OffsetDateTime,
    ) -> Result<PartnerLimit, PromoError> {
        if cap <= 0 {
            return Err(PromoError::InvalidArgument("限额必须大于 0".to_string()));
        }

        Ok(PartnerLimit::new(
            partner.id(),
            cap,
            OffsetDateTime::now_utc(),
            end_at,
        ))
    }

    /// 撤销有效限额
    ///
    /// 与替换限额不同，显式撤销不清零计数。
    pub fn cancel_active_limit(&self, partner: &mut Partner) -> Result<(), PromoError> {
        if !partner.is_active {
            return Err(PromoError::InactivePartner);
        }
        if let Some(limit) = partner.active_limit_mut() {
            limit.cancel(OffsetDateTime::now_utc());
        }

        Ok(())
    }
}
