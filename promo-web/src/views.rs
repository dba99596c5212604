//! 请求与响应的外部表示

use promo::{
    domain::Entity,
    errors::PromoError,
    partner::{Partner, PartnerLimit},
};
use serde::{Deserialize, Serialize};
use time::{
    OffsetDateTime, PrimitiveDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};
use uuid::Uuid;

/// 对外展示的时间格式 `dd.MM.yyyy hh:mm:ss`，小时为 12 小时制
const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day].[month].[year] [hour repr:12]:[minute]:[second]");

/// 不带时区的本地时间，按 UTC 解释
const LOCAL_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]");

pub fn display(at: OffsetDateTime) -> Result<String, PromoError> {
    Ok(at.format(DISPLAY_FORMAT)?)
}

fn parse_end_date<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    OffsetDateTime::parse(&raw, &Rfc3339)
        .or_else(|_| PrimitiveDateTime::parse(&raw, LOCAL_FORMAT).map(PrimitiveDateTime::assume_utc))
        .map_err(serde::de::Error::custom)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLimitRequest {
    pub limit: i32,
    #[serde(deserialize_with = "parse_end_date")]
    pub end_date: OffsetDateTime,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerResponse {
    pub id: Uuid,
    pub name: String,
    pub number_issued_promo_codes: i32,
    pub is_active: bool,
    pub partner_limits: Vec<PartnerLimitResponse>,
}

impl TryFrom<&Partner> for PartnerResponse {
    type Error = PromoError;

    fn try_from(partner: &Partner) -> Result<Self, Self::Error> {
        Ok(Self {
            id: partner.id(),
            name: partner.name.clone(),
            number_issued_promo_codes: partner.issued_codes,
            is_active: partner.is_active,
            partner_limits: partner
                .limits()
                .iter()
                .map(PartnerLimitResponse::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerLimitResponse {
    pub id: Uuid,
    pub partner_id: Uuid,
    pub limit: i32,
    pub create_date: String,
    pub end_date: String,
    pub cancel_date: Option<String>,
}

impl TryFrom<&PartnerLimit> for PartnerLimitResponse {
    type Error = PromoError;

    fn try_from(limit: &PartnerLimit) -> Result<Self, Self::Error> {
        Ok(Self {
            id: limit.id(),
            partner_id: limit.partner_id(),
            limit: limit.cap(),
            create_date: display(limit.created_at())?,
            end_date: display(limit.end_at())?,
            cancel_date: limit.canceled_at().map(display).transpose()?,
        })
    }
}
