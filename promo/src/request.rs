use crate::response::PromoResponse;
use axum::{
    body::Bytes,
    extract::FromRequest,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// 合作伙伴请求的路径参数
#[derive(serde::Deserialize)]
pub struct PartnerKey {
    /// 合作伙伴 Id
    pub id: Uuid,
}

/// 合作伙伴限额请求的路径参数
#[derive(serde::Deserialize)]
pub struct LimitKey {
    /// 合作伙伴 Id
    pub id: Uuid,
    /// 限额 Id
    pub limit_id: Uuid,
}

/// 解析 JSON 请求体
///
/// 格式错误统一返回 400，不区分语法错误与字段错误。
pub struct PromoJson<T>(pub T);

impl<T, S> FromRequest<S> for PromoJson<T>
where
    T: DeserializeOwned,
    Bytes: FromRequest<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| e.into_response())?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|e| PromoResponse::ValidateError(e.to_string()).into_response())?;

        Ok(PromoJson(value))
    }
}
