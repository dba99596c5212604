use super::respond;
use crate::{
    AppState,
    views::{PartnerLimitResponse, PartnerResponse, SetLimitRequest},
};
use axum::{
    Json,
    extract::{Path, State},
    response::Response,
};
use promo::{
    LimitKey, PartnerKey, PromoJson, PromoResponse,
    domain::{Entity, PartnerStore},
    errors::PromoError,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[instrument(name = "list_partners", skip_all)]
pub async fn list<S: PartnerStore>(State(svc): State<Arc<AppState<S>>>) -> Response {
    respond(list_partners(&svc).await)
}

#[instrument(name = "get_partner_limit", skip_all, fields(%id, %limit_id))]
pub async fn limit<S: PartnerStore>(
    Path(LimitKey { id, limit_id }): Path<LimitKey>,
    State(svc): State<Arc<AppState<S>>>,
) -> Response {
    respond(find_limit(&svc, id, limit_id).await)
}

#[instrument(name = "set_partner_limit", skip_all, fields(%id))]
pub async fn set_limit<S: PartnerStore>(
    Path(PartnerKey { id }): Path<PartnerKey>,
    State(svc): State<Arc<AppState<S>>>,
    PromoJson(req): PromoJson<SetLimitRequest>,
) -> Response {
    respond(replace_limit(&svc, id, req).await)
}

#[instrument(name = "cancel_partner_limit", skip_all, fields(%id))]
pub async fn cancel_limit<S: PartnerStore>(
    Path(PartnerKey { id }): Path<PartnerKey>,
    State(svc): State<Arc<AppState<S>>>,
) -> Response {
    respond(cancel_active(&svc, id).await)
}

async fn list_partners<S: PartnerStore>(
    svc: &AppState<S>,
) -> Result<Json<Vec<PartnerResponse>>, PromoError> {
    let partners = svc.policy.store().fetch_all().await?;
    let body = partners
        .iter()
        .map(PartnerResponse::try_from)
        .collect::<Result<_, _>>()?;
    Ok(Json(body))
}

async fn find_limit<S: PartnerStore>(
    svc: &AppState<S>,
    id: Uuid,
    limit_id: Uuid,
) -> Result<Json<PartnerLimitResponse>, PromoError> {
    let partner = svc.policy.store().fetch_by_id(id).await?;
    let limit = partner
        .limit(limit_id)
        .ok_or(PromoError::LimitNotFound(limit_id))?;
    Ok(Json(PartnerLimitResponse::try_from(limit)?))
}

async fn replace_limit<S: PartnerStore>(
    svc: &AppState<S>,
    id: Uuid,
    req: SetLimitRequest,
) -> Result<PromoResponse, PromoError> {
    let _guard = svc.locks.acquire(id).await;
    let policy = &svc.policy;

    let mut partner = policy.eligible_partner(id).await?;
    policy.deactivate_current_limit(&mut partner);
    let limit = policy.build_limit(&partner, req.limit, req.end_date)?;
    let limit_id = limit.id();
    partner.add_limit(limit)?;
    policy.store().persist(&partner).await?;

    info!(%limit_id, cap = req.limit, "设置合作伙伴限额");
    Ok(PromoResponse::Created(format!(
        "/api/v1/partners/{}/limits/{limit_id}",
        partner.id()
    )))
}

async fn cancel_active<S: PartnerStore>(
    svc: &AppState<S>,
    id: Uuid,
) -> Result<PromoResponse, PromoError> {
    let _guard = svc.locks.acquire(id).await;
    let policy = &svc.policy;

    let mut partner = policy.store().fetch_by_id(id).await?;
    policy.cancel_active_limit(&mut partner)?;
    policy.store().persist(&partner).await?;

    info!("撤销合作伙伴限额");
    Ok(PromoResponse::NoContent)
}
