//! # **promo** 特征

use crate::{
    errors::{ConfigError, PromoError},
    partner::Partner,
};
use std::future::Future;
use uuid::Uuid;

/// 实体特征
pub trait Entity: Send + Sync + Clone + 'static {
    /// 获取 id
    fn id(&self) -> Uuid;
}

/// 合作伙伴存储特征
///
/// 存储只以合作伙伴为单位整体读写，限额随所属合作伙伴一同持久化。
pub trait PartnerStore: Send + Sync + 'static {
    /// 按 id 获取合作伙伴，不存在时返回 [`PromoError::PartnerNotFound`]
    fn fetch_by_id(&self, id: Uuid) -> impl Future<Output = Result<Partner, PromoError>> + Send;
    /// 获取全部合作伙伴
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Partner>, PromoError>> + Send;
    /// 持久化合作伙伴
    fn persist(&self, partner: &Partner) -> impl Future<Output = Result<(), PromoError>> + Send;
}

/// 配置特征
pub trait Config: Sized + 'static {
    /// 获取配置
    fn get() -> Result<Self, ConfigError>;
    /// 重载配置
    fn reload() -> Result<(), ConfigError>;
}
