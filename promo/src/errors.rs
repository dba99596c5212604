//! # **promo** 错误定义

use crate::response::PromoResponse;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;

/// **promo** 错误枚举
#[derive(Debug, Error)]
pub enum PromoError {
    /// 合作伙伴不存在
    #[error("合作伙伴不存在：{0}")]
    PartnerNotFound(Uuid),
    /// 限额不存在
    #[error("限额不存在：{0}")]
    LimitNotFound(Uuid),
    /// 合作伙伴未激活
    #[error("该合作伙伴未激活")]
    InactivePartner,
    /// 参数无效
    #[error("参数无效：{0}")]
    InvalidArgument(String),
    /// 已存在有效限额
    #[error("已存在有效限额")]
    ActiveLimitExists,
    /// 存储错误
    #[error("存储错误：{0}")]
    StoreError(String),
    /// 时间格式化错误
    #[error("时间格式化错误")]
    FormatError(#[from] time::error::Format),
}

impl PromoError {
    /// 转换成 Response 结构
    pub fn response(&self) -> PromoResponse {
        match self {
            PromoError::PartnerNotFound(_) | PromoError::LimitNotFound(_) => {
                PromoResponse::NotFound(self.to_string())
            }
            PromoError::InactivePartner
            | PromoError::InvalidArgument(_)
            | PromoError::ActiveLimitExists => PromoResponse::CheckError(self.to_string()),
            PromoError::StoreError(_) | PromoError::FormatError(_) => PromoResponse::InternalError,
        }
    }
}

impl IntoResponse for PromoError {
    fn into_response(self) -> Response {
        self.response().into_response()
    }
}

impl From<&str> for PromoError {
    fn from(s: &str) -> Self {
        PromoError::StoreError(s.to_owned())
    }
}

/// 配置错误枚举
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 加载配置错误
    #[error("加载配置错误：{0}")]
    LoadError(#[from] config::ConfigError),
    /// 配置验证错误
    #[error("配置验证错误：{0}")]
    ValidationError(String),
    /// 配置锁定错误
    #[error("配置锁定错误：{0}")]
    LockError(String),
}
