use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};

const INTERNAL_ERROR: &str = "服务器内部错误";

/// 请求处理结果枚举
#[derive(Debug, PartialEq)]
pub enum PromoResponse {
    /// 已创建，携带新资源的位置
    Created(String),
    /// 成功且无内容
    NoContent,
    /// 请求数据验证错误
    ValidateError(String),
    /// 资源不存在
    NotFound(String),
    /// 请求无法应用到合作伙伴
    CheckError(String),
    /// 内部错误，不暴露细节
    InternalError,
}

impl std::fmt::Display for PromoResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromoResponse::Created(location) => write!(f, "已创建：{location}"),
            PromoResponse::NoContent => write!(f, "成功且无内容"),
            PromoResponse::ValidateError(msg) => write!(f, "请求数据验证错误：{msg}"),
            PromoResponse::NotFound(msg) => write!(f, "资源不存在：{msg}"),
            PromoResponse::CheckError(msg) => write!(f, "请求无法应用：{msg}"),
            PromoResponse::InternalError => write!(f, "{INTERNAL_ERROR}"),
        }
    }
}

impl IntoResponse for PromoResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            PromoResponse::Created(location) => {
                (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
            }
            PromoResponse::NoContent => StatusCode::NO_CONTENT.into_response(),
            PromoResponse::ValidateError(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            PromoResponse::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            PromoResponse::CheckError(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            PromoResponse::InternalError => {
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
            }
        }
    }
}
