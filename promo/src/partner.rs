//! # 合作伙伴与限额实体

use crate::{domain::Entity, errors::PromoError, macros::entity};
use time::OffsetDateTime;
use uuid::Uuid;

/// 合作伙伴
///
/// 限额历史只追加不删除，其中至多一条未撤销。
#[entity]
pub struct Partner {
    /// 名称
    pub name: String,
    /// 是否激活，未激活的合作伙伴不允许任何限额操作
    pub is_active: bool,
    /// 当前限额下已发放的促销码数量
    pub issued_codes: i32,
    pub(crate) limits: Vec<PartnerLimit>,
}

impl Partner {
    /// 构造函数
    pub fn new(id: Uuid, name: impl Into<String>, is_active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            is_active,
            issued_codes: 0,
            limits: Vec::new(),
        }
    }

    /// 由存储的数据重建合作伙伴
    ///
    /// 限额须属于该合作伙伴，且至多一条未撤销。
    pub fn restore(
        id: Uuid,
        name: impl Into<String>,
        is_active: bool,
        issued_codes: i32,
        limits: impl IntoIterator<Item = PartnerLimit>,
    ) -> Result<Self, PromoError> {
        let mut partner = Self::new(id, name, is_active).with_issued_codes(issued_codes);
        for limit in limits {
            partner.add_limit(limit)?;
        }
        Ok(partner)
    }

    /// 设置已发放促销码数量
    pub fn with_issued_codes(mut self, issued_codes: i32) -> Self {
        self.issued_codes = issued_codes;
        self
    }

    /// 全部限额，按设置先后排列
    pub fn limits(&self) -> &[PartnerLimit] {
        &self.limits
    }

    /// 按 id 查找限额
    pub fn limit(&self, limit_id: Uuid) -> Option<&PartnerLimit> {
        self.limits.iter().find(|l| l.id() == limit_id)
    }

    /// 当前有效限额
    ///
    /// 仅以撤销时间判定，不考虑截止时间是否已过。
    pub fn active_limit(&self) -> Option<&PartnerLimit> {
        self.limits.iter().find(|l| l.is_active())
    }

    pub(crate) fn active_limit_mut(&mut self) -> Option<&mut PartnerLimit> {
        self.limits.iter_mut().find(|l| l.is_active())
    }

    /// 追加限额
    pub fn add_limit(&mut self, limit: PartnerLimit) -> Result<(), PromoError> {
        if limit.partner_id != self.id {
            return Err(PromoError::InvalidArgument(format!(
                "限额属于合作伙伴 {}",
                limit.partner_id
            )));
        }
        if limit.is_active() && self.active_limit().is_some() {
            return Err(PromoError::ActiveLimitExists);
        }

        self.limits.push(limit);
        Ok(())
    }
}

/// 合作伙伴促销码限额
#[entity]
pub struct PartnerLimit {
    pub(crate) partner_id: Uuid,
    pub(crate) cap: i32,
    pub(crate) created_at: OffsetDateTime,
    pub(crate) end_at: OffsetDateTime,
    pub(crate) canceled_at: Option<OffsetDateTime>,
}

impl PartnerLimit {
    pub(crate) fn new(
        partner_id: Uuid,
        cap: i32,
        created_at: OffsetDateTime,
        end_at: OffsetDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            partner_id,
            cap,
            created_at,
            end_at,
            canceled_at: None,
        }
    }

    /// 由存储的数据重建限额
    pub fn restore(
        id: Uuid,
        partner_id: Uuid,
        cap: i32,
        created_at: OffsetDateTime,
        end_at: OffsetDateTime,
        canceled_at: Option<OffsetDateTime>,
    ) -> Self {
        Self {
            id,
            partner_id,
            cap,
            created_at,
            end_at,
            canceled_at,
        }
    }

    /// 所属合作伙伴 Id
    pub fn partner_id(&self) -> Uuid {
        self.partner_id
    }

    /// 促销码数量上限
    pub fn cap(&self) -> i32 {
        self.cap
    }

    /// 创建时间
    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// 截止时间
    pub fn end_at(&self) -> OffsetDateTime {
        self.end_at
    }

    /// 撤销时间
    pub fn canceled_at(&self) -> Option<OffsetDateTime> {
        self.canceled_at
    }

    /// 是否有效
    pub fn is_active(&self) -> bool {
        self.canceled_at.is_none()
    }

    /// 撤销限额，已撤销的保持原撤销时间
    pub(crate) fn cancel(&mut self, at: OffsetDateTime) -> bool {
        if self.canceled_at.is_some() {
            return false;
        }
        self.canceled_at = Some(at);
        true
    }
}
