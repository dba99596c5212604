pub mod partner;

use axum::response::{IntoResponse, Response};
use promo::{PromoResponse, errors::PromoError};
use tracing::{error, warn};

/// 处理结果转换为响应，内部错误只记录日志不外泄
pub(crate) fn respond<T: IntoResponse>(result: Result<T, PromoError>) -> Response {
    match result {
        Ok(res) => res.into_response(),
        Err(e) => {
            let res = e.response();
            if res == PromoResponse::InternalError {
                error!("请求处理失败：{e}");
            } else {
                warn!("请求被拒绝：{e}");
            }
            res.into_response()
        }
    }
}
